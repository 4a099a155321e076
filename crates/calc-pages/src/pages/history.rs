//! History panel.

use crate::locator::Locator;
use crate::page_object::PageObject;
use crate::result::{PageError, PageResult};
use crate::session::{Element, Session};
use tracing::{debug, warn};

const HISTORY_LABEL: Locator = Locator::accessibility_id("HistoryLabel");
const CLEAR_HISTORY: Locator = Locator::accessibility_id("ClearHistory");
const HISTORY_EMPTY: Locator = Locator::accessibility_id("HistoryEmpty");

/// History pivot and its controls
#[derive(Debug, Clone, Copy)]
pub struct HistoryPanel<'s> {
    session: &'s dyn Session,
}

impl<'s> HistoryPanel<'s> {
    /// Create the panel over a session
    #[must_use]
    pub fn new(session: &'s dyn Session) -> Self {
        Self { session }
    }

    /// The "History" pivot item
    pub fn history_label(&self) -> PageResult<Element<'s>> {
        HISTORY_LABEL.resolve(self.session)
    }

    /// The "Clear all history" button; only shown while history has entries
    pub fn clear_history_button(&self) -> PageResult<Element<'s>> {
        CLEAR_HISTORY.resolve(self.session)
    }

    /// The "There's no history yet" label
    pub fn history_empty_label(&self) -> PageResult<Element<'s>> {
        HISTORY_EMPTY.resolve(self.session)
    }

    /// Bring the history pivot to the front
    pub fn open(&self) -> PageResult<()> {
        let label = self.history_label()?;
        if !label.is_selected()? {
            label.click()?;
        }
        Ok(())
    }

    /// Remove every history entry.
    ///
    /// The clear button disappears once history is empty, so its absence is
    /// only accepted when the empty-history label is shown instead.
    pub fn clear_history(&self) -> PageResult<()> {
        self.open()?;
        match CLEAR_HISTORY.try_resolve(self.session)? {
            Some(button) => {
                debug!("clearing history");
                button.click()
            }
            None => {
                if HISTORY_EMPTY.is_present(self.session)? {
                    warn!("history already empty, nothing to clear");
                    Ok(())
                } else {
                    Err(PageError::unexpected_ui_state(
                        "history panel shows neither 'ClearHistory' nor 'HistoryEmpty'",
                    ))
                }
            }
        }
    }
}

impl<'s> PageObject<'s> for HistoryPanel<'s> {
    fn session(&self) -> &'s dyn Session {
        self.session
    }

    fn anchor(&self) -> Locator {
        HISTORY_LABEL
    }

    fn page_name(&self) -> &str {
        "HistoryPanel"
    }
}
