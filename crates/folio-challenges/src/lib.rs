//! Folio — JavaScript challenges playground.
//!
//! Small closure-style utilities (pluralize, once, counter, cycle iterator,
//! after, censor) expressed as explicit state-holding types, plus the
//! per-visitor playground that runs their demos.

pub mod application;
pub mod domain;
