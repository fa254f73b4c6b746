//! Folio Core — shared domain abstractions.
//!
//! This crate defines the traits and types every playground context depends
//! on: time, randomness, commands, errors, and session storage. It contains
//! no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
pub mod rng;
