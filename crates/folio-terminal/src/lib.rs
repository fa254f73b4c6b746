//! Folio — terminal widget.
//!
//! Five small scripted programs (shipping calculator, magic 8-ball, scrabble
//! scorer, coffee bot, physics calculator), each modelled as a pure
//! transition from (dialogue state, input line) to (next state, output
//! lines), and the terminal session that switches between them.

pub mod application;
pub mod domain;
