//! Simple UI polling.
//!
//! Page operations are single-shot and fail fast. Polling exists for the few
//! places where the UI is known to animate (the navigation pane sliding in)
//! and for callers who treat absence as an expected transient state.

use crate::result::{PageError, PageResult};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::trace;

/// Default timeout for wait operations (5 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Shortest pause between probes; a zero interval is raised to this
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Options for wait operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Outcome of a successful wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitResult<T> {
    /// The value the probe produced
    pub value: T,
    /// Time spent waiting
    pub elapsed: Duration,
    /// Number of probes made, including the successful one
    pub attempts: u32,
}

/// Polls a probe until it yields a value or the timeout elapses
#[derive(Debug, Clone, Copy, Default)]
pub struct Waiter {
    options: WaitOptions,
}

impl Waiter {
    /// Create a waiter with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom options
    #[must_use]
    pub const fn with_options(options: WaitOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    #[must_use]
    pub const fn options(&self) -> &WaitOptions {
        &self.options
    }

    /// Poll `probe` until it returns `Some`.
    ///
    /// The probe always runs at least once. An `Err` from the probe ends the
    /// wait immediately; running out of time yields [`PageError::Timeout`].
    pub fn until<T, F>(&self, what: &str, mut probe: F) -> PageResult<WaitResult<T>>
    where
        F: FnMut() -> PageResult<Option<T>>,
    {
        let start = Instant::now();
        let timeout = self.options.timeout();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            if let Some(value) = probe()? {
                return Ok(WaitResult {
                    value,
                    elapsed: start.elapsed(),
                    attempts,
                });
            }

            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Err(PageError::Timeout {
                    what: what.to_string(),
                    ms: self.options.timeout_ms,
                });
            }

            trace!(what, attempts, "still waiting");
            let remaining = timeout - elapsed;
            let pause = self.options.poll_interval().max(MIN_POLL_INTERVAL);
            std::thread::sleep(pause.min(remaining));
        }
    }
}
