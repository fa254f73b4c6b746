//! Shared application state.

use std::sync::{Arc, Mutex};

use folio_challenges::domain::playground::Playground;
use folio_core::clock::{Clock, SystemClock};
use folio_core::repository::SessionRepository;
use folio_core::rng::{DeterministicRng, SystemRng};
use folio_darkroom::domain::darkroom::Darkroom;
use folio_session_store::memory_session_repository::InMemorySessionRepository;
use folio_terminal::domain::terminal::Terminal;

use crate::config::AppConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock for timestamps and develop timing.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// RNG for the magic 8-ball.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Terminal sessions keyed by visitor.
    pub terminals: Arc<dyn SessionRepository<Terminal>>,
    /// Challenge playgrounds keyed by visitor.
    pub playgrounds: Arc<dyn SessionRepository<Playground>>,
    /// Darkrooms keyed by visitor.
    pub darkrooms: Arc<dyn SessionRepository<Darkroom>>,
    /// Startup configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        terminals: Arc<dyn SessionRepository<Terminal>>,
        playgrounds: Arc<dyn SessionRepository<Playground>>,
        darkrooms: Arc<dyn SessionRepository<Darkroom>>,
        config: AppConfig,
    ) -> Self {
        Self {
            clock,
            rng,
            terminals,
            playgrounds,
            darkrooms,
            config: Arc::new(config),
        }
    }

    /// Production state: system clock, OS-seeded RNG, in-memory sessions.
    #[must_use]
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(Mutex::new(SystemRng::from_os())),
            Arc::new(InMemorySessionRepository::<Terminal>::new()),
            Arc::new(InMemorySessionRepository::<Playground>::new()),
            Arc::new(InMemorySessionRepository::<Darkroom>::new()),
            config,
        )
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use chrono::{TimeZone, Utc};
    use folio_challenges::domain::playground::Playground;
    use folio_core::clock::Clock;
    use folio_core::repository::SessionRepository;
    use folio_core::rng::DeterministicRng;
    use folio_darkroom::domain::darkroom::Darkroom;
    use folio_session_store::memory_session_repository::InMemorySessionRepository;
    use folio_terminal::domain::terminal::Terminal;
    use folio_test_support::{FixedClock, MockRng};

    use super::AppState;
    use crate::config::AppConfig;

    /// In-memory repositories with the given overrides, a fixed clock, a
    /// `MockRng`, and no command delay.
    pub(crate) fn state_with(
        terminals: Option<Arc<dyn SessionRepository<Terminal>>>,
        playgrounds: Option<Arc<dyn SessionRepository<Playground>>>,
        darkrooms: Option<Arc<dyn SessionRepository<Darkroom>>>,
    ) -> AppState {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(MockRng));
        let config = AppConfig {
            command_delay: Duration::ZERO,
            ..AppConfig::default()
        };
        AppState::new(
            clock,
            rng,
            terminals.unwrap_or_else(|| Arc::new(InMemorySessionRepository::<Terminal>::new())),
            playgrounds
                .unwrap_or_else(|| Arc::new(InMemorySessionRepository::<Playground>::new())),
            darkrooms.unwrap_or_else(|| Arc::new(InMemorySessionRepository::<Darkroom>::new())),
            config,
        )
    }

    pub(crate) fn in_memory_state() -> AppState {
        state_with(None, None, None)
    }

    pub(crate) fn post_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    pub(crate) fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub(crate) async fn json_body(response: Response) -> serde_json::Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }
}
