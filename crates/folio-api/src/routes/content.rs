//! Routes for the static portfolio content.

use axum::{Json, Router, routing::get};
use tracing::instrument;

use folio_content::{Experience, Project};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /experience
#[instrument]
async fn list_experience() -> Result<Json<&'static [Experience]>, ApiError> {
    Ok(Json(folio_content::list_experience()?))
}

/// GET /projects
#[instrument]
async fn list_projects() -> Result<Json<&'static [Project]>, ApiError> {
    Ok(Json(folio_content::list_projects()?))
}

/// Returns the router for portfolio content.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/experience", get(list_experience))
        .route("/projects", get(list_projects))
}
