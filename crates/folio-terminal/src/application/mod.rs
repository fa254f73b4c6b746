//! Application layer: command and query handlers for terminals.

pub mod command_handlers;
pub mod query_handlers;
