//! Scientific-mode calculator page.

use super::{HistoryPanel, MemoryPanel, NavigationMenu, OperatorsPanel};
use crate::config::PageConfig;
use crate::locator::Locator;
use crate::mode::{CalculatorMode, CALCULATOR_RESULTS_ID};
use crate::narration::NarrationFilter;
use crate::page_object::PageObject;
use crate::result::{PageError, PageResult};
use crate::session::{Element, Session};
use tracing::{debug, info};

const HEADER: Locator = Locator::accessibility_id("Header");
const CALCULATOR_RESULT: Locator = Locator::accessibility_id(CALCULATOR_RESULTS_ID);

/// UI automation objects and helpers available while the calculator is in
/// scientific mode.
///
/// Borrows the session; every accessor looks its element up again.
#[derive(Debug, Clone)]
pub struct ScientificCalculatorPage<'s> {
    session: &'s dyn Session,
    narration: NarrationFilter,
    operators: OperatorsPanel<'s>,
    memory: MemoryPanel<'s>,
    history: HistoryPanel<'s>,
    navigation: NavigationMenu<'s>,
}

impl<'s> ScientificCalculatorPage<'s> {
    /// Create the page with default configuration
    #[must_use]
    pub fn new(session: &'s dyn Session) -> Self {
        Self::with_config(session, &PageConfig::default())
    }

    /// Create the page and its panels from one configuration
    #[must_use]
    pub fn with_config(session: &'s dyn Session, config: &PageConfig) -> Self {
        Self {
            session,
            narration: config.narration_prefixes.clone(),
            operators: OperatorsPanel::new(session),
            memory: MemoryPanel::new(session),
            history: HistoryPanel::new(session),
            navigation: NavigationMenu::with_wait(session, config.wait),
        }
    }

    /// Operator keypad
    #[must_use]
    pub const fn operators(&self) -> &OperatorsPanel<'s> {
        &self.operators
    }

    /// Memory panel
    #[must_use]
    pub const fn memory(&self) -> &MemoryPanel<'s> {
        &self.memory
    }

    /// History panel
    #[must_use]
    pub const fn history(&self) -> &HistoryPanel<'s> {
        &self.history
    }

    /// Navigation menu
    #[must_use]
    pub const fn navigation(&self) -> &NavigationMenu<'s> {
        &self.navigation
    }

    /// The mode title at the top of the window
    pub fn header(&self) -> PageResult<Element<'s>> {
        HEADER.resolve(self.session)
    }

    /// The result display
    pub fn calculator_result(&self) -> PageResult<Element<'s>> {
        CALCULATOR_RESULT.resolve(self.session)
    }

    /// Mode named by the header
    pub fn current_mode(&self) -> PageResult<CalculatorMode> {
        let text = self.header()?.text()?;
        let title = text.trim();
        CalculatorMode::ALL
            .into_iter()
            .find(|mode| mode.header_text() == title)
            .ok_or_else(|| {
                PageError::unexpected_ui_state(format!("header '{title}' names no known mode"))
            })
    }

    /// Switch to `mode` and check that its surface is on screen
    pub fn navigate_to_mode(&self, mode: CalculatorMode) -> PageResult<()> {
        self.navigation.change_mode(mode)?;

        let header = HEADER
            .try_resolve(self.session)?
            .ok_or_else(|| PageError::navigation_failed(mode, "header is not present"))?;
        let title = header.text()?;
        if title.trim() != mode.header_text() {
            return Err(PageError::navigation_failed(
                mode,
                format!(
                    "header reads '{}', expected '{}'",
                    title.trim(),
                    mode.header_text()
                ),
            ));
        }

        if !Locator::accessibility_id(mode.surface_id()).is_present(self.session)? {
            return Err(PageError::navigation_failed(
                mode,
                format!("'{}' is not present", mode.surface_id()),
            ));
        }

        info!(%mode, "calculator mode active");
        Ok(())
    }

    /// Clear the display, the memory panel and the history panel.
    ///
    /// Steps run in order and stop at the first failure.
    pub fn clear_all(&self) -> PageResult<()> {
        info!("clearing display, memory and history");
        let display = self.calculator_result()?.text()?;
        if display.is_empty() {
            self.operators.clear_button()?.click()?;
        } else {
            self.operators.clear_entry_button()?.click()?;
        }
        self.operators.clear_button()?.click()?;
        self.memory.clear_memory()?;
        self.history.clear_history()
    }

    /// Display text as rendered, without narrator wording
    pub fn result_text(&self) -> PageResult<String> {
        let raw = self.calculator_result()?.text()?;
        let shown = self.narration.normalize(&raw);
        debug!(raw = %raw, shown, "read result");
        Ok(shown.to_string())
    }
}

impl<'s> PageObject<'s> for ScientificCalculatorPage<'s> {
    fn session(&self) -> &'s dyn Session {
        self.session
    }

    fn anchor(&self) -> Locator {
        CALCULATOR_RESULT
    }

    fn page_name(&self) -> &str {
        "ScientificCalculatorPage"
    }
}
