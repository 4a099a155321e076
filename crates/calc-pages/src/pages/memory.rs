//! Memory panel.

use crate::locator::Locator;
use crate::page_object::PageObject;
use crate::result::PageResult;
use crate::session::{Element, Session};
use tracing::debug;

const MEMORY_CLEAR: Locator = Locator::accessibility_id("ClearMemoryButton");

/// Memory controls ("MC" and friends)
#[derive(Debug, Clone, Copy)]
pub struct MemoryPanel<'s> {
    session: &'s dyn Session,
}

impl<'s> MemoryPanel<'s> {
    /// Create the panel over a session
    #[must_use]
    pub fn new(session: &'s dyn Session) -> Self {
        Self { session }
    }

    /// The "MC" button
    pub fn memory_clear(&self) -> PageResult<Element<'s>> {
        MEMORY_CLEAR.resolve(self.session)
    }

    /// Clear every stored memory value
    pub fn clear_memory(&self) -> PageResult<()> {
        debug!("clearing memory");
        self.memory_clear()?.click()
    }
}

impl<'s> PageObject<'s> for MemoryPanel<'s> {
    fn session(&self) -> &'s dyn Session {
        self.session
    }

    fn anchor(&self) -> Locator {
        MEMORY_CLEAR
    }

    fn page_name(&self) -> &str {
        "MemoryPanel"
    }
}
