//! Navigation menu (the hamburger pane listing every mode).

use crate::locator::Locator;
use crate::mode::CalculatorMode;
use crate::page_object::PageObject;
use crate::result::PageResult;
use crate::session::{Element, Session};
use crate::wait::WaitOptions;
use tracing::info;

const TOGGLE_PANE: Locator = Locator::accessibility_id("TogglePaneButton");

/// Navigation pane toggle and its mode entries
#[derive(Debug, Clone, Copy)]
pub struct NavigationMenu<'s> {
    session: &'s dyn Session,
    wait: WaitOptions,
}

impl<'s> NavigationMenu<'s> {
    /// Create the menu over a session, with default pane polling
    #[must_use]
    pub fn new(session: &'s dyn Session) -> Self {
        Self::with_wait(session, WaitOptions::default())
    }

    /// Create the menu with custom polling for the pane animation
    #[must_use]
    pub fn with_wait(session: &'s dyn Session, wait: WaitOptions) -> Self {
        Self { session, wait }
    }

    /// The hamburger button
    pub fn toggle_button(&self) -> PageResult<Element<'s>> {
        TOGGLE_PANE.resolve(self.session)
    }

    /// A mode's entry in the open pane
    pub fn mode_item(&self, mode: CalculatorMode) -> PageResult<Element<'s>> {
        Locator::accessibility_id(mode.nav_item_id()).resolve(self.session)
    }

    /// Open the pane and pick `mode`.
    ///
    /// The pane slides in, so the mode entry is polled for; everything else
    /// is a single lookup.
    pub fn change_mode(&self, mode: CalculatorMode) -> PageResult<()> {
        info!(%mode, "changing calculator mode");
        self.toggle_button()?.click()?;
        Locator::accessibility_id(mode.nav_item_id())
            .wait_for(self.session, &self.wait)?
            .click()
    }
}

impl<'s> PageObject<'s> for NavigationMenu<'s> {
    fn session(&self) -> &'s dyn Session {
        self.session
    }

    fn anchor(&self) -> Locator {
        TOGGLE_PANE
    }

    fn page_name(&self) -> &str {
        "NavigationMenu"
    }
}
