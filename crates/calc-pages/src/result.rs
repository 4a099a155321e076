//! Result and error types for calc-pages.

use crate::mode::CalculatorMode;
use thiserror::Error;

/// Result type for page-object operations
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur while driving the calculator UI
#[derive(Debug, Error)]
pub enum PageError {
    /// No element with the accessibility id exists in the current UI tree
    #[error("Element not found: accessibility id '{accessibility_id}'")]
    ElementNotFound {
        /// Accessibility id that failed to resolve
        accessibility_id: String,
    },

    /// A previously resolved element is no longer part of the UI tree
    #[error("Stale element reference: accessibility id '{accessibility_id}'")]
    StaleElement {
        /// Accessibility id the reference was resolved from
        accessibility_id: String,
    },

    /// The application did not reach the requested mode
    #[error("Navigation to {mode} mode failed: {reason}")]
    NavigationFailed {
        /// Mode that was requested
        mode: CalculatorMode,
        /// What did not hold after the transition
        reason: String,
    },

    /// Display or panel state did not match what a composite operation expects
    #[error("Unexpected UI state: {message}")]
    UnexpectedUiState {
        /// Error message
        message: String,
    },

    /// Polling gave up
    #[error("Timed out after {ms}ms waiting for {what}")]
    Timeout {
        /// What was being waited for
        what: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// The automation backend reported a failure
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// HTTP transport error
    #[cfg(feature = "webdriver")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl PageError {
    /// Create an element-not-found error
    #[must_use]
    pub fn element_not_found(accessibility_id: impl Into<String>) -> Self {
        Self::ElementNotFound {
            accessibility_id: accessibility_id.into(),
        }
    }

    /// Create a navigation failure
    #[must_use]
    pub fn navigation_failed(mode: CalculatorMode, reason: impl Into<String>) -> Self {
        Self::NavigationFailed {
            mode,
            reason: reason.into(),
        }
    }

    /// Create an unexpected-UI-state error
    #[must_use]
    pub fn unexpected_ui_state(message: impl Into<String>) -> Self {
        Self::UnexpectedUiState {
            message: message.into(),
        }
    }

    /// Create a driver error
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when the error means "the element is not there"
    #[must_use]
    pub const fn is_element_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}
