//! Commands for the darkroom.

use chrono::Duration;
use folio_core::command::Command;
use uuid::Uuid;

use super::darkroom::FileReference;

/// Command to drop a file into a visitor's developing tray.
#[derive(Debug, Clone)]
pub struct UploadPhoto {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The darkroom receiving the photo.
    pub darkroom_id: Uuid,
    /// The uploaded file's metadata.
    pub file: FileReference,
    /// How long the photo stays in the developer.
    pub develop_duration: Duration,
}

impl Command for UploadPhoto {
    fn command_type(&self) -> &'static str {
        "darkroom.upload_photo"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
