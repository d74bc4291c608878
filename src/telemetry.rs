//! Tracing subscriber setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "postbox=info,tower_http=info";

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds the log filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global `fmt` subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already set.
pub fn init_tracing() -> Result<(), TelemetryError> {
    tracing_subscriber::fmt().with_env_filter(env_filter()).try_init()
}
