//! Routes for the photo darkroom.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use folio_core::error::DomainError;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use folio_darkroom::application::command_handlers;
use folio_darkroom::application::query_handlers::{self, DarkroomView, PhotoView};
use folio_darkroom::domain::commands;
use folio_darkroom::domain::darkroom::FileReference;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /photos.
#[derive(Debug, Deserialize)]
pub struct UploadPhotoRequest {
    /// The visitor's darkroom.
    pub darkroom_id: Uuid,
    pub file_name: String,
    /// MIME type reported by the browser, e.g. `image/jpeg`.
    pub media_type: String,
    pub size_bytes: u64,
}

/// POST /photos
#[instrument(
    skip(state, request),
    fields(darkroom_id = %request.darkroom_id, media_type = %request.media_type)
)]
async fn upload_photo(
    State(state): State<AppState>,
    Json(request): Json<UploadPhotoRequest>,
) -> Result<Json<PhotoView>, ApiError> {
    let develop_duration = state
        .config
        .develop_time_delta()
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
    let command = commands::UploadPhoto {
        correlation_id: Uuid::new_v4(),
        darkroom_id: request.darkroom_id,
        file: FileReference {
            file_name: request.file_name,
            media_type: request.media_type,
            size_bytes: request.size_bytes,
        },
        develop_duration,
    };

    info!(correlation_id = %command.correlation_id, "handling upload_photo command");

    let view =
        command_handlers::handle_upload_photo(&command, state.clock.as_ref(), &*state.darkrooms)
            .await?;

    Ok(Json(view))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_darkroom(
    State(state): State<AppState>,
    Path(darkroom_id): Path<Uuid>,
) -> Result<Json<DarkroomView>, ApiError> {
    let view = query_handlers::get_darkroom_by_id(
        darkroom_id,
        state.clock.as_ref(),
        &*state.darkrooms,
    )
    .await?;
    Ok(Json(view))
}

/// Returns the router for the darkroom.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos", post(upload_photo))
        .route("/{id}", get(get_darkroom))
}
