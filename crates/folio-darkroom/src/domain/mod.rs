//! Domain layer: the darkroom aggregate and its commands.

pub mod commands;
pub mod darkroom;
