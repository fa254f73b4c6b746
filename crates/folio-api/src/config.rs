//! Server configuration read from the environment at startup.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_COMMAND_DELAY_MS: u64 = 300;
const DEFAULT_DEVELOP_DURATION_MS: u64 = 3_500;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Pause before a submitted terminal line is processed
    /// (`FOLIO_COMMAND_DELAY_MS`).
    pub command_delay: Duration,
    /// How long uploaded photos stay developing
    /// (`FOLIO_DEVELOP_DURATION_MS`).
    pub develop_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            command_delay: Duration::from_millis(DEFAULT_COMMAND_DELAY_MS),
            develop_duration: Duration::from_millis(DEFAULT_DEVELOP_DURATION_MS),
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => defaults.port,
        };
        let command_delay = millis(&lookup, "FOLIO_COMMAND_DELAY_MS")?
            .unwrap_or(defaults.command_delay);
        let develop_duration = millis(&lookup, "FOLIO_DEVELOP_DURATION_MS")?
            .unwrap_or(defaults.develop_duration);

        let config = Self {
            host,
            port,
            command_delay,
            develop_duration,
        };
        config.develop_time_delta()?;
        Ok(config)
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a valid address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Develop duration as a calendar duration for the darkroom domain.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the duration does not fit.
    pub fn develop_time_delta(&self) -> Result<chrono::Duration, AppError> {
        chrono::Duration::from_std(self.develop_duration)
            .map_err(|e| AppError::Config(format!("FOLIO_DEVELOP_DURATION_MS out of range: {e}")))
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<Duration>, AppError> {
    lookup(key)
        .map(|raw| {
            raw.parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| AppError::Config(format!("{key} must be milliseconds: {e}")))
        })
        .transpose()
}
