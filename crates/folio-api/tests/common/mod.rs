//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_challenges::domain::playground::Playground;
use folio_core::clock::Clock;
use folio_core::rng::DeterministicRng;
use folio_darkroom::domain::darkroom::Darkroom;
use folio_session_store::memory_session_repository::InMemorySessionRepository;
use folio_terminal::domain::terminal::Terminal;
use folio_test_support::{FixedClock, SequenceRng};
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::AppConfig;
use folio_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over fresh in-memory repositories with a
/// deterministic clock, an empty `SequenceRng`, and no command delay.
pub fn build_test_app() -> Router {
    build_test_app_with(fixed_clock(), SequenceRng::new(vec![]))
}

/// Build the full app router with a custom clock and RNG.
pub fn build_test_app_with(clock: Arc<dyn Clock + Send + Sync>, rng: SequenceRng) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let config = AppConfig {
        command_delay: Duration::ZERO,
        ..AppConfig::default()
    };
    let app_state = AppState::new(
        clock,
        rng,
        Arc::new(InMemorySessionRepository::<Terminal>::new()),
        Arc::new(InMemorySessionRepository::<Playground>::new()),
        Arc::new(InMemorySessionRepository::<Darkroom>::new()),
        config,
    );
    folio_api::app(app_state)
}

/// Send a POST request with a JSON body and return the response. Non-JSON
/// bodies (axum's extractor rejections) come back as `Value::Null`.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
