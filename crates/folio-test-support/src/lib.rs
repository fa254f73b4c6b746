//! Shared test mocks and utilities for the Folio portfolio playground.

mod clock;
mod repository;
mod rng;

pub use clock::{FixedClock, SteppingClock};
pub use repository::{FailingSessionRepository, RecordingSessionRepository};
pub use rng::{MockRng, SequenceRng};
