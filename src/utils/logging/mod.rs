//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber. `RUST_LOG` takes
//! precedence over the configured level when it is set.

use crate::config::LoggingConfig;
use crate::utils::error::{BulkError, Result};
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, letting `RUST_LOG` override it
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            BulkError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| BulkError::internal(format!("Failed to initialize logging: {}", e)))
}

/// Subscriber for the window before the configuration is loaded
///
/// Uses the default level (or `RUST_LOG`) and is meant to be scoped to a
/// future with `WithSubscriber`, not installed globally.
pub fn bootstrap_dispatch(json: bool) -> Dispatch {
    let config = LoggingConfig {
        json,
        ..LoggingConfig::default()
    };
    let filter = build_filter(&config).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        Dispatch::new(builder.json().finish())
    } else {
        Dispatch::new(builder.finish())
    }
}
