//! The darkroom aggregate.

use chrono::{DateTime, Duration, Utc};
use folio_core::clock::Clock;
use folio_core::error::DomainError;
use uuid::Uuid;

/// Default time a fresh upload spends in the developer bath, in milliseconds.
pub const DEFAULT_DEVELOP_DURATION_MS: i64 = 3_500;

/// Most photos a tray holds; the oldest are dropped past this.
pub const PHOTO_LIMIT: usize = 24;

/// Metadata of a file handed to the darkroom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

/// A photo in the tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: Uuid,
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub develop_until: DateTime<Utc>,
}

impl Photo {
    /// True until `develop_until` has been reached.
    #[must_use]
    pub fn is_developing(&self, now: DateTime<Utc>) -> bool {
        now < self.develop_until
    }

    #[must_use]
    pub fn caption(&self, now: DateTime<Utc>) -> &'static str {
        if self.is_developing(now) {
            "Developing..."
        } else {
            "Developed Scan"
        }
    }
}

/// A visitor's tray of photos, newest first.
#[derive(Debug, Clone)]
pub struct Darkroom {
    /// Aggregate identifier.
    pub id: Uuid,
    photos: Vec<Photo>,
}

impl Darkroom {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            photos: Vec::new(),
        }
    }

    /// Puts a new photo at the front of the tray.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the media type is not an image,
    /// or if `develop_duration` is negative.
    ///
    /// The tray keeps at most [`PHOTO_LIMIT`] photos.
    pub fn upload(
        &mut self,
        file: FileReference,
        clock: &dyn Clock,
        develop_duration: Duration,
    ) -> Result<&Photo, DomainError> {
        if !file.media_type.starts_with("image/") {
            return Err(DomainError::Validation(format!(
                "only image files can be developed, got {:?}",
                file.media_type
            )));
        }
        if develop_duration < Duration::zero() {
            return Err(DomainError::Validation(
                "develop duration must not be negative".to_owned(),
            ));
        }

        let uploaded_at = clock.now();
        self.photos.insert(
            0,
            Photo {
                id: Uuid::new_v4(),
                file_name: file.file_name,
                media_type: file.media_type,
                size_bytes: file.size_bytes,
                uploaded_at,
                develop_until: uploaded_at + develop_duration,
            },
        );
        self.photos.truncate(PHOTO_LIMIT);
        Ok(&self.photos[0])
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }
}
