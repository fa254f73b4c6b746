//! Test repositories — mock `SessionRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::error::DomainError;
use folio_core::repository::{SessionRepository, StoredSession};
use uuid::Uuid;

/// A session repository that returns a configured snapshot from every `load`
/// call and records every `save`. Saves always succeed and report
/// `expected_version + 1`.
#[derive(Debug)]
pub struct RecordingSessionRepository<S> {
    load_result: Mutex<Option<StoredSession<S>>>,
    saved: Mutex<Vec<(Uuid, i64, S)>>,
}

impl<S> RecordingSessionRepository<S> {
    /// Create a repository whose `load` returns nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            load_result: Mutex::new(None),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Create a repository whose `load` returns `state` at `version`.
    #[must_use]
    pub fn with_state(session_id: Uuid, version: i64, state: S, updated_at: DateTime<Utc>) -> Self {
        Self {
            load_result: Mutex::new(Some(StoredSession {
                session_id,
                version,
                state,
                updated_at,
            })),
            saved: Mutex::new(Vec::new()),
        }
    }
}

impl<S: Clone> RecordingSessionRepository<S> {
    /// Returns a snapshot of all `(session_id, expected_version, state)`
    /// saves.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved(&self) -> Vec<(Uuid, i64, S)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl<S> SessionRepository<S> for RecordingSessionRepository<S>
where
    S: Clone + Send + 'static,
{
    async fn load(&self, _session_id: Uuid) -> Result<Option<StoredSession<S>>, DomainError> {
        Ok(self.load_result.lock().unwrap().clone())
    }

    async fn save(
        &self,
        session_id: Uuid,
        expected_version: i64,
        state: S,
        _updated_at: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        self.saved
            .lock()
            .unwrap()
            .push((session_id, expected_version, state));
        Ok(expected_version + 1)
    }
}

/// A session repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSessionRepository;

#[async_trait]
impl<S> SessionRepository<S> for FailingSessionRepository
where
    S: Send + 'static,
{
    async fn load(&self, _session_id: Uuid) -> Result<Option<StoredSession<S>>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(
        &self,
        _session_id: Uuid,
        _expected_version: i64,
        _state: S,
        _updated_at: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
