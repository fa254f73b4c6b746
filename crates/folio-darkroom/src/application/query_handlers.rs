//! Query handlers for the darkroom.
//!
//! Views are rendered against the current clock, so the `developing` flag
//! flips on its own once a photo's develop time has passed.

use chrono::{DateTime, Utc};
use folio_core::clock::Clock;
use folio_core::error::DomainError;
use folio_core::repository::SessionRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::darkroom::{Darkroom, Photo};

/// Read-only view of a photo at a point in time.
#[derive(Debug, Serialize)]
pub struct PhotoView {
    pub photo_id: Uuid,
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub develop_until: DateTime<Utc>,
    /// Whether the photo is still in the developer.
    pub developing: bool,
    pub caption: &'static str,
}

impl PhotoView {
    pub(crate) fn new(photo: &Photo, now: DateTime<Utc>) -> Self {
        Self {
            photo_id: photo.id,
            file_name: photo.file_name.clone(),
            media_type: photo.media_type.clone(),
            size_bytes: photo.size_bytes,
            uploaded_at: photo.uploaded_at,
            develop_until: photo.develop_until,
            developing: photo.is_developing(now),
            caption: photo.caption(now),
        }
    }
}

/// Read-only view of a darkroom.
#[derive(Debug, Serialize)]
pub struct DarkroomView {
    /// The darkroom identifier.
    pub darkroom_id: Uuid,
    /// Photos, newest first.
    pub photos: Vec<PhotoView>,
    /// Stored version, for optimistic concurrency.
    pub version: i64,
}

/// Retrieves a darkroom by its identifier.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no darkroom is stored under
/// `darkroom_id`, or `DomainError` if the repository load fails.
pub async fn get_darkroom_by_id(
    darkroom_id: Uuid,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Darkroom>,
) -> Result<DarkroomView, DomainError> {
    let stored = repo
        .load(darkroom_id)
        .await?
        .ok_or(DomainError::AggregateNotFound(darkroom_id))?;
    let now = clock.now();
    Ok(DarkroomView {
        darkroom_id,
        photos: stored
            .state
            .photos()
            .iter()
            .map(|photo| PhotoView::new(photo, now))
            .collect(),
        version: stored.version,
    })
}
