//! Folio Session Store — in-memory `SessionRepository` implementation.
//!
//! Nothing is persisted: every snapshot lives in process memory and is gone
//! when the server restarts.

pub mod memory_session_repository;
