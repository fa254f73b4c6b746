//! In-memory implementation of the `SessionRepository` trait.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use folio_core::error::DomainError;
use folio_core::repository::{SessionRepository, StoredSession};

/// Process-local session repository keyed by session id.
#[derive(Debug)]
pub struct InMemorySessionRepository<S> {
    sessions: Mutex<HashMap<Uuid, StoredSession<S>>>,
}

impl<S> InMemorySessionRepository<S> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored sessions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the internal mutex is poisoned.
    pub fn len(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.len())
    }

    /// Returns `true` if no session has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the internal mutex is poisoned.
    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, StoredSession<S>>>, DomainError> {
        self.sessions
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("session store mutex poisoned: {e}")))
    }
}

impl<S> Default for InMemorySessionRepository<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> SessionRepository<S> for InMemorySessionRepository<S>
where
    S: Clone + Send + 'static,
{
    async fn load(&self, session_id: Uuid) -> Result<Option<StoredSession<S>>, DomainError> {
        Ok(self.lock()?.get(&session_id).cloned())
    }

    async fn save(
        &self,
        session_id: Uuid,
        expected_version: i64,
        state: S,
        updated_at: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        let mut sessions = self.lock()?;
        let actual = sessions.get(&session_id).map_or(0, |stored| stored.version);
        if actual != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id: session_id,
                expected: expected_version,
                actual,
            });
        }

        let version = actual + 1;
        sessions.insert(
            session_id,
            StoredSession {
                session_id,
                version,
                state,
                updated_at,
            },
        );
        debug!(%session_id, version, "session saved");
        Ok(version)
    }
}
