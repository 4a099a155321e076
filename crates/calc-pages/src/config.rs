//! Page-object configuration

use crate::logging::LoggingConfig;
use crate::narration::NarrationFilter;
use crate::result::{PageError, PageResult};
use crate::wait::WaitOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default WinAppDriver endpoint
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4723";

/// Default per-request timeout for the WebDriver backend (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Where to find an already running automation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebDriverConfig {
    /// Base URL of the automation server
    pub server_url: String,
    /// Id of the session to attach to
    pub session_id: Option<String>,
    /// Timeout for each HTTP request
    pub request_timeout_ms: u64,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            session_id: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl WebDriverConfig {
    /// Set the server URL
    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Set the session id
    #[must_use]
    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }
}

/// Configuration shared by every page object built from one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Narrator prefixes stripped from display text
    pub narration_prefixes: NarrationFilter,
    /// Polling used where the UI animates
    pub wait: WaitOptions,
    /// Log output
    pub logging: LoggingConfig,
    /// WebDriver backend settings
    pub webdriver: WebDriverConfig,
}

impl PageConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the narration prefixes
    #[must_use]
    pub fn with_narration_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.narration_prefixes = NarrationFilter::with_prefixes(prefixes);
        self
    }

    /// Set wait options
    #[must_use]
    pub const fn with_wait(mut self, wait: WaitOptions) -> Self {
        self.wait = wait;
        self
    }

    /// Set logging options
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Set WebDriver options
    #[must_use]
    pub fn with_webdriver(mut self, webdriver: WebDriverConfig) -> Self {
        self.webdriver = webdriver;
        self
    }

    /// Parse from YAML and validate
    pub fn from_yaml_str(yaml: &str) -> PageResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file and validate
    pub fn from_file(path: impl AsRef<Path>) -> PageResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> PageResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> PageResult<()> {
        if self.wait.poll_interval_ms == 0 {
            return Err(PageError::config("wait.poll_interval_ms must be positive"));
        }
        if self.wait.poll_interval_ms > self.wait.timeout_ms && self.wait.timeout_ms > 0 {
            return Err(PageError::config(format!(
                "wait.poll_interval_ms ({}) exceeds wait.timeout_ms ({})",
                self.wait.poll_interval_ms, self.wait.timeout_ms
            )));
        }
        if !self.webdriver.server_url.starts_with("http://")
            && !self.webdriver.server_url.starts_with("https://")
        {
            return Err(PageError::config(format!(
                "webdriver.server_url '{}' is not an http(s) URL",
                self.webdriver.server_url
            )));
        }
        if self.webdriver.request_timeout_ms == 0 {
            return Err(PageError::config(
                "webdriver.request_timeout_ms must be positive",
            ));
        }
        Ok(())
    }
}
