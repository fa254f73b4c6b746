//! Command handlers for the darkroom.

use folio_core::clock::Clock;
use folio_core::command::Command;
use folio_core::error::DomainError;
use folio_core::repository::SessionRepository;
use tracing::debug;

use crate::application::query_handlers::PhotoView;
use crate::domain::commands::UploadPhoto;
use crate::domain::darkroom::Darkroom;

/// Handles the `UploadPhoto` command: loads the darkroom (creating it when
/// absent), adds the photo, and saves with the loaded version.
///
/// # Errors
///
/// Returns `DomainError::Validation` for non-image files, or `DomainError`
/// if loading or saving the darkroom fails.
pub async fn handle_upload_photo(
    command: &UploadPhoto,
    clock: &dyn Clock,
    repo: &dyn SessionRepository<Darkroom>,
) -> Result<PhotoView, DomainError> {
    let darkroom_id = command.darkroom_id;
    let (mut darkroom, version) = repo
        .load(darkroom_id)
        .await?
        .map_or_else(|| (Darkroom::new(darkroom_id), 0), |stored| (stored.state, stored.version));

    let photo = darkroom.upload(command.file.clone(), clock, command.develop_duration)?;
    let view = PhotoView::new(photo, clock.now());

    let saved_version = repo.save(darkroom_id, version, darkroom, clock.now()).await?;
    debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        %darkroom_id,
        photo_id = %view.photo_id,
        version = saved_version,
        "photo uploaded"
    );
    Ok(view)
}
