//! calc-pages: page objects for a desktop calculator under UI automation
//!
//! Tests talk to the calculator through named page objects instead of raw
//! accessibility ids. Every page borrows one automation [`Session`] and looks
//! its elements up again on each access, so a page stays valid across mode
//! switches and redraws.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ScientificCalculatorPage                                    │
//! │    ├── OperatorsPanel   (clear / clear entry)                │
//! │    ├── MemoryPanel      (clear memory)                       │
//! │    ├── HistoryPanel     (clear history)                      │
//! │    └── NavigationMenu   (mode switching, polled)             │
//! │                    │                                         │
//! │                    ▼  Locator::resolve                       │
//! │  dyn Session ──► MockSession      (in-memory tree)           │
//! │              └─► WebDriverSession (feature = "webdriver")    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use calc_pages::prelude::*;
//!
//! let session = MockSession::calculator(CalculatorMode::Standard);
//! let page = ScientificCalculatorPage::new(&session);
//!
//! page.navigate_to_mode(CalculatorMode::Scientific)?;
//! page.clear_all()?;
//! assert_eq!(page.result_text()?, "0");
//! # Ok::<(), PageError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod config;
mod locator;
mod logging;
/// In-memory session and scripted calculator for tests
pub mod mock;
mod mode;
mod narration;
mod page_object;
/// Page objects for the calculator's screens and panels
pub mod pages;
mod result;
mod session;
mod wait;
/// WebDriver wire-protocol backend
#[cfg(feature = "webdriver")]
pub mod webdriver;

pub use config::{PageConfig, WebDriverConfig, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SERVER_URL};
pub use locator::Locator;
pub use logging::{init_tracing, LogFormat, LoggingConfig, DEFAULT_LOG_LEVEL};
pub use mock::{MockSession, MockTree};
pub use mode::{CalculatorMode, ParseModeError, CALCULATOR_RESULTS_ID};
pub use narration::{NarrationFilter, DISPLAY_PREFIX};
pub use page_object::PageObject;
pub use pages::{HistoryPanel, MemoryPanel, NavigationMenu, OperatorsPanel, ScientificCalculatorPage};
pub use result::{PageError, PageResult};
pub use session::{Element, ElementRef, Session};
pub use wait::{
    WaitOptions, WaitResult, Waiter, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS,
    MIN_POLL_INTERVAL,
};
#[cfg(feature = "webdriver")]
pub use webdriver::WebDriverSession;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::config::*;
    pub use super::locator::*;
    pub use super::logging::*;
    pub use super::mock::{MockSession, MockTree};
    pub use super::mode::*;
    pub use super::narration::*;
    pub use super::page_object::*;
    pub use super::pages::*;
    pub use super::result::*;
    pub use super::session::*;
    pub use super::wait::*;
    #[cfg(feature = "webdriver")]
    pub use super::webdriver::WebDriverSession;
}
