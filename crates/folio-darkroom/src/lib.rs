//! Folio — darkroom.
//!
//! Visitors drop image files into a virtual developing tray. Each photo
//! stays "developing" for a configured duration after upload; the state is
//! derived from the clock rather than flipped by a timer.

pub mod application;
pub mod domain;
