//! Application layer: command and query handlers for darkrooms.

pub mod command_handlers;
pub mod query_handlers;
