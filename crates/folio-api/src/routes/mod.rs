//! Route modules, one per page section.

pub mod content;
pub mod darkroom;
pub mod health;
pub mod playground;
pub mod terminal;
