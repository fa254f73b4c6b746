//! Routes for the terminal widget.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use folio_terminal::application::command_handlers;
use folio_terminal::application::query_handlers::{self, TerminalView};
use folio_terminal::domain::app::TerminalApp;
use folio_terminal::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /select-app.
#[derive(Debug, Deserialize)]
pub struct SelectAppRequest {
    /// The visitor's terminal.
    pub terminal_id: Uuid,
    /// The app to start.
    pub app: TerminalApp,
}

/// Request body for POST /submit-line.
#[derive(Debug, Deserialize)]
pub struct SubmitLineRequest {
    /// The visitor's terminal.
    pub terminal_id: Uuid,
    /// The line as typed.
    pub line: String,
}

/// Lines appended to the transcript by a command.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<String>,
}

/// POST /select-app
#[instrument(skip(state, request), fields(terminal_id = %request.terminal_id, app = %request.app))]
async fn select_app(
    State(state): State<AppState>,
    Json(request): Json<SelectAppRequest>,
) -> Result<Json<LinesResponse>, ApiError> {
    let command = commands::SelectApp {
        correlation_id: Uuid::new_v4(),
        terminal_id: request.terminal_id,
        app: request.app,
    };

    info!(correlation_id = %command.correlation_id, "handling select_app command");

    let lines =
        command_handlers::handle_select_app(&command, state.clock.as_ref(), &*state.terminals)
            .await?;

    Ok(Json(LinesResponse { lines }))
}

/// POST /submit-line
///
/// Waits the configured command delay before running the line, mimicking a
/// script taking a moment to respond.
#[instrument(skip(state, request), fields(terminal_id = %request.terminal_id))]
async fn submit_line(
    State(state): State<AppState>,
    Json(request): Json<SubmitLineRequest>,
) -> Result<Json<LinesResponse>, ApiError> {
    let command = commands::SubmitLine {
        correlation_id: Uuid::new_v4(),
        terminal_id: request.terminal_id,
        line: request.line,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_line command");

    if !state.config.command_delay.is_zero() {
        tokio::time::sleep(state.config.command_delay).await;
    }

    let lines = command_handlers::handle_submit_line(
        &command,
        state.clock.as_ref(),
        &state.rng,
        &*state.terminals,
    )
    .await?;

    Ok(Json(LinesResponse { lines }))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_terminal(
    State(state): State<AppState>,
    Path(terminal_id): Path<Uuid>,
) -> Result<Json<TerminalView>, ApiError> {
    let view = query_handlers::get_terminal_by_id(terminal_id, &*state.terminals).await?;
    Ok(Json(view))
}

/// Returns the router for the terminal widget.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/select-app", post(select_app))
        .route("/submit-line", post(submit_line))
        .route("/{id}", get(get_terminal))
}
