//! Folio API server entry point.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use folio_api::config::AppConfig;
use folio_api::error::AppError;
use folio_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Folio API server");

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;
    tracing::info!(
        command_delay_ms = u64::try_from(config.command_delay.as_millis()).unwrap_or(u64::MAX),
        develop_duration_ms =
            u64::try_from(config.develop_duration.as_millis()).unwrap_or(u64::MAX),
        "configuration loaded"
    );

    // TODO: Replace CorsLayer::permissive() with the site's origin once it is deployed.
    let app = folio_api::app(AppState::in_memory(config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
