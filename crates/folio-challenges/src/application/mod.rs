//! Application layer: command and query handlers for the playground.

pub mod command_handlers;
pub mod query_handlers;
