//! Log output for test runs.
//!
//! Page objects log through `tracing`; a test binary installs a subscriber
//! once with [`init_tracing`]. `RUST_LOG` wins over the configured level.

use crate::result::{PageError, PageResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `calc_pages=debug`)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include the event target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Set the filter directive
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the filter: `RUST_LOG` if set, the configured level otherwise
    pub fn env_filter(&self) -> PageResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                PageError::config(format!("invalid log level '{}': {e}", self.level))
            }),
        }
    }
}

/// Install a global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed, so every test
/// may call this.
pub fn init_tracing(config: &LoggingConfig) -> PageResult<bool> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_test_writer();

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };
    Ok(installed)
}
