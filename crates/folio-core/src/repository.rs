//! Session repository abstraction.
//!
//! Every visitor-owned piece of state (a terminal, a darkroom tray, a
//! playground) is stored as a versioned snapshot keyed by its identifier.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of a session snapshot.
#[derive(Debug, Clone)]
pub struct StoredSession<S> {
    /// Session identifier.
    pub session_id: Uuid,
    /// Number of successful saves; 0 means never saved.
    pub version: i64,
    /// The snapshot itself.
    pub state: S,
    /// Timestamp of the last save.
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for loading and saving session snapshots.
#[async_trait]
pub trait SessionRepository<S>: Send + Sync
where
    S: Send + 'static,
{
    /// Load the snapshot for a session, or `None` if it was never saved.
    async fn load(&self, session_id: Uuid) -> Result<Option<StoredSession<S>>, DomainError>;

    /// Save a snapshot with optimistic concurrency and return the new version.
    /// `expected_version` is the version observed by the preceding `load`
    /// (0 when the session did not exist).
    async fn save(
        &self,
        session_id: Uuid,
        expected_version: i64,
        state: S,
        updated_at: DateTime<Utc>,
    ) -> Result<i64, DomainError>;
}
