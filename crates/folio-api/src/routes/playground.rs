//! Routes for the challenges playground.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use folio_challenges::application::command_handlers;
use folio_challenges::application::query_handlers::{
    self, AfterView, CensorView, CounterView, PlaygroundView, PluralizeView,
};
use folio_challenges::domain::commands;
use folio_challenges::domain::playground::{CounterAction, CounterKey};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /pluralize.
#[derive(Debug, Deserialize)]
pub struct PluralizeRequest {
    /// Comma-separated words.
    pub input: String,
}

/// Request body for POST /censor.
#[derive(Debug, Deserialize)]
pub struct CensorRequest {
    pub text: String,
    /// Comma-separated words to mask.
    pub bad_words: String,
}

/// Request body for POST /once.
#[derive(Debug, Deserialize)]
pub struct OnceRequest {
    pub playground_id: Uuid,
    pub value: i64,
}

/// Request body for POST /counter.
#[derive(Debug, Deserialize)]
pub struct CounterRequest {
    pub playground_id: Uuid,
    pub counter: CounterKey,
    pub action: CounterAction,
}

/// Request body for POST /cycle.
#[derive(Debug, Deserialize)]
pub struct CycleRequest {
    pub playground_id: Uuid,
}

/// Request body for POST /after. With `threshold` the gate is re-armed
/// instead of clicked.
#[derive(Debug, Deserialize)]
pub struct AfterRequest {
    pub playground_id: Uuid,
    #[serde(default)]
    pub threshold: Option<u32>,
}

/// Response for POST /once.
#[derive(Debug, Serialize)]
pub struct OnceResponse {
    pub argument: i64,
    pub result: i64,
    /// Whether this call ran the wrapped function.
    pub executed: bool,
}

/// Response for POST /cycle.
#[derive(Debug, Serialize)]
pub struct CycleResponse {
    pub current: &'static str,
    pub history: Vec<&'static str>,
}

/// POST /pluralize
#[instrument(skip(request))]
async fn pluralize(Json(request): Json<PluralizeRequest>) -> Json<PluralizeView> {
    Json(query_handlers::pluralize_input(&request.input))
}

/// POST /censor
#[instrument(skip(request))]
async fn censor(Json(request): Json<CensorRequest>) -> Json<CensorView> {
    Json(query_handlers::censor_input(&request.text, &request.bad_words))
}

/// POST /once
#[instrument(skip(state, request), fields(playground_id = %request.playground_id))]
async fn call_once(
    State(state): State<AppState>,
    Json(request): Json<OnceRequest>,
) -> Result<Json<OnceResponse>, ApiError> {
    let command = commands::CallOnce {
        correlation_id: Uuid::new_v4(),
        playground_id: request.playground_id,
        argument: request.value,
    };

    info!(correlation_id = %command.correlation_id, "handling call_once command");

    let outcome =
        command_handlers::handle_call_once(&command, state.clock.as_ref(), &*state.playgrounds)
            .await?;

    Ok(Json(OnceResponse {
        argument: outcome.argument,
        result: outcome.result,
        executed: outcome.executed,
    }))
}

/// POST /counter
#[instrument(skip(state, request), fields(playground_id = %request.playground_id))]
async fn apply_counter_action(
    State(state): State<AppState>,
    Json(request): Json<CounterRequest>,
) -> Result<Json<CounterView>, ApiError> {
    let command = commands::ApplyCounterAction {
        correlation_id: Uuid::new_v4(),
        playground_id: request.playground_id,
        counter: request.counter,
        action: request.action,
    };

    info!(
        correlation_id = %command.correlation_id,
        counter = ?command.counter,
        action = ?command.action,
        "handling apply_counter_action command"
    );

    let snapshot = command_handlers::handle_apply_counter_action(
        &command,
        state.clock.as_ref(),
        &*state.playgrounds,
    )
    .await?;

    Ok(Json(snapshot.into()))
}

/// POST /cycle
#[instrument(skip(state, request), fields(playground_id = %request.playground_id))]
async fn advance_day(
    State(state): State<AppState>,
    Json(request): Json<CycleRequest>,
) -> Result<Json<CycleResponse>, ApiError> {
    let command = commands::AdvanceDay {
        correlation_id: Uuid::new_v4(),
        playground_id: request.playground_id,
    };

    info!(correlation_id = %command.correlation_id, "handling advance_day command");

    let outcome =
        command_handlers::handle_advance_day(&command, state.clock.as_ref(), &*state.playgrounds)
            .await?;

    Ok(Json(CycleResponse {
        current: outcome.day,
        history: outcome.history,
    }))
}

/// POST /after
#[instrument(skip(state, request), fields(playground_id = %request.playground_id))]
async fn after(
    State(state): State<AppState>,
    Json(request): Json<AfterRequest>,
) -> Result<Json<AfterView>, ApiError> {
    let correlation_id = Uuid::new_v4();
    let outcome = match request.threshold {
        Some(threshold) => {
            let command = commands::RearmAfter {
                correlation_id,
                playground_id: request.playground_id,
                threshold,
            };
            info!(%correlation_id, threshold, "handling rearm_after command");
            command_handlers::handle_rearm_after(
                &command,
                state.clock.as_ref(),
                &*state.playgrounds,
            )
            .await?
        }
        None => {
            let command = commands::CallAfter {
                correlation_id,
                playground_id: request.playground_id,
            };
            info!(%correlation_id, "handling call_after command");
            command_handlers::handle_call_after(&command, state.clock.as_ref(), &*state.playgrounds)
                .await?
        }
    };

    Ok(Json(outcome.into()))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_playground(
    State(state): State<AppState>,
    Path(playground_id): Path<Uuid>,
) -> Result<Json<PlaygroundView>, ApiError> {
    let view = query_handlers::get_playground_by_id(playground_id, &*state.playgrounds).await?;
    Ok(Json(view))
}

/// Returns the router for the challenges playground.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pluralize", post(pluralize))
        .route("/censor", post(censor))
        .route("/once", post(call_once))
        .route("/counter", post(apply_counter_action))
        .route("/cycle", post(advance_day))
        .route("/after", post(after))
        .route("/{id}", get(get_playground))
}
