//! Logging setup for the `scn` binary.
//!
//! Filter precedence: `RUST_LOG`, then `--log-level`, then `SCN_LOG_LEVEL`.
//! Everything is written to stderr; stdout carries only report tables.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to install the log subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))
}

/// Filter for a configured level or directive string, ignoring `RUST_LOG`.
fn level_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::Filter {
        value: log_level.to_string(),
        source,
    })
}
