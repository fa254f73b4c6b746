//! Folio API — library root.
//!
//! Exposes the router, state, configuration, and error types so that
//! `main.rs` and the integration tests build the same application.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router with all route groups mounted.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/terminal", routes::terminal::router())
        .nest("/api/v1/playground", routes::playground::router())
        .nest("/api/v1/darkroom", routes::darkroom::router())
        .nest("/api/v1/content", routes::content::router())
        .with_state(state)
}
