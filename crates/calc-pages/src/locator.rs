//! Locator abstraction for accessibility-id lookups.
//!
//! A [`Locator`] is a repeatable lookup, not a cached element: every call
//! resolves the accessibility id against the session's current UI tree.
//! Calculator controls are torn down and rebuilt as modes and panels change,
//! so a reference kept across interactions goes stale.

use crate::result::PageResult;
use crate::session::{Element, Session};
use crate::wait::{WaitOptions, Waiter};
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// Lookup of one UI control by accessibility id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    accessibility_id: Cow<'static, str>,
}

impl Locator {
    /// Locator for a fixed accessibility id
    #[must_use]
    pub const fn accessibility_id(id: &'static str) -> Self {
        Self {
            accessibility_id: Cow::Borrowed(id),
        }
    }

    /// Locator for an accessibility id computed at runtime
    #[must_use]
    pub fn owned(id: impl Into<String>) -> Self {
        Self {
            accessibility_id: Cow::Owned(id.into()),
        }
    }

    /// The accessibility id this locator resolves
    #[must_use]
    pub fn id(&self) -> &str {
        &self.accessibility_id
    }

    /// Resolve against the session, failing with `ElementNotFound` when absent
    pub fn resolve<'s>(&self, session: &'s dyn Session) -> PageResult<Element<'s>> {
        debug!(accessibility_id = self.id(), "resolve");
        let handle = session.find_by_accessibility_id(self.id())?;
        Ok(Element::new(session, handle))
    }

    /// Resolve against the session, tolerating absence
    pub fn try_resolve<'s>(&self, session: &'s dyn Session) -> PageResult<Option<Element<'s>>> {
        debug!(accessibility_id = self.id(), "try_resolve");
        Ok(session
            .try_find_by_accessibility_id(self.id())?
            .map(|handle| Element::new(session, handle)))
    }

    /// Whether the element is currently in the UI tree
    pub fn is_present(&self, session: &dyn Session) -> PageResult<bool> {
        Ok(session.try_find_by_accessibility_id(self.id())?.is_some())
    }

    /// Poll until the element appears
    pub fn wait_for<'s>(
        &self,
        session: &'s dyn Session,
        options: &WaitOptions,
    ) -> PageResult<Element<'s>> {
        let what = format!("element '{}'", self.id());
        let outcome = Waiter::with_options(*options).until(&what, || {
            Ok(session
                .try_find_by_accessibility_id(self.id())?
                .map(|handle| Element::new(session, handle)))
        })?;
        debug!(
            accessibility_id = self.id(),
            attempts = outcome.attempts,
            elapsed = ?outcome.elapsed,
            "element appeared"
        );
        Ok(outcome.value)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accessibility id '{}'", self.accessibility_id)
    }
}
