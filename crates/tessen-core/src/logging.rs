//! Tracing subscriber setup shared by binaries and integration tests.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the log filter: `RUST_LOG` wins when set, otherwise the configured
/// level is used, falling back to `info` if it does not parse.
#[must_use]
pub fn filter_for(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(config.level.as_str()).unwrap_or_else(|e| {
        eprintln!("invalid log level {:?} ({e}), using info", config.level);
        EnvFilter::new("info")
    })
}

/// ## Summary
/// Installs the global `fmt` subscriber.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init(config: &LoggingConfig) -> CoreResult<()> {
    tracing_subscriber::registry()
        .with(filter_for(config))
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init()
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    tracing::debug!(level = %config.level, "Logging initialized");

    Ok(())
}
