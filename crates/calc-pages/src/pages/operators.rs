//! Operator keypad controls used by the composite operations.

use crate::locator::Locator;
use crate::page_object::PageObject;
use crate::result::PageResult;
use crate::session::{Element, Session};

const CLEAR: Locator = Locator::accessibility_id("clearButton");
const CLEAR_ENTRY: Locator = Locator::accessibility_id("clearEntryButton");

/// Clear controls of the operator keypad
#[derive(Debug, Clone, Copy)]
pub struct OperatorsPanel<'s> {
    session: &'s dyn Session,
}

impl<'s> OperatorsPanel<'s> {
    /// Create the panel over a session
    #[must_use]
    pub fn new(session: &'s dyn Session) -> Self {
        Self { session }
    }

    /// The "C" button: clears the display and the pending expression
    pub fn clear_button(&self) -> PageResult<Element<'s>> {
        CLEAR.resolve(self.session)
    }

    /// The "CE" button: clears the current entry only
    pub fn clear_entry_button(&self) -> PageResult<Element<'s>> {
        CLEAR_ENTRY.resolve(self.session)
    }
}

impl<'s> PageObject<'s> for OperatorsPanel<'s> {
    fn session(&self) -> &'s dyn Session {
        self.session
    }

    fn anchor(&self) -> Locator {
        CLEAR
    }

    fn page_name(&self) -> &str {
        "OperatorsPanel"
    }
}
