//! Domain layer: interpreters, dialogue session, and the terminal aggregate.

pub mod app;
pub mod coffee;
pub mod commands;
pub mod dialogue;
pub mod magic8;
pub mod number;
pub mod physics;
pub mod scrabble;
pub mod shipping;
pub mod terminal;

/// Horizontal rule printed between sections of script output.
pub const RULE: &str = "--------------------------------";
