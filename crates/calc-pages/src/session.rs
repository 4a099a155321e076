//! Session - the automation seam page objects talk through.
//!
//! A [`Session`] is a live handle to a running, automatable calculator. It is
//! created and torn down by whatever owns the test run; page objects only ever
//! borrow it.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Page objects (&dyn Session) │
//! ├──────────────────────────────┤
//! │  Session (trait)             │
//! │   ├─ MockSession    (tests)  │
//! │   └─ WebDriverSession (HTTP) │
//! └──────────────────────────────┘
//! ```

use crate::result::{PageError, PageResult};
use std::fmt;
use tracing::debug;

/// Reference to one UI control, as handed out by a session.
///
/// Only valid until the UI tree changes underneath it; page objects resolve a
/// fresh one on every access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    /// Backend-assigned element reference
    pub element_id: String,
    /// Accessibility id the reference was resolved from
    pub accessibility_id: String,
}

impl ElementRef {
    /// Create a new element reference
    #[must_use]
    pub fn new(element_id: impl Into<String>, accessibility_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            accessibility_id: accessibility_id.into(),
        }
    }
}

/// Live automation session against the calculator.
///
/// Implementors only have to provide the optional lookup; the required lookup
/// is derived from it and turns absence into [`PageError::ElementNotFound`].
pub trait Session: fmt::Debug {
    /// Find an element by accessibility id, tolerating absence
    fn try_find_by_accessibility_id(&self, accessibility_id: &str)
        -> PageResult<Option<ElementRef>>;

    /// Find an element by accessibility id, failing if it is absent
    fn find_by_accessibility_id(&self, accessibility_id: &str) -> PageResult<ElementRef> {
        self.try_find_by_accessibility_id(accessibility_id)?
            .ok_or_else(|| PageError::element_not_found(accessibility_id))
    }

    /// Click an element
    fn click(&self, element: &ElementRef) -> PageResult<()>;

    /// Read an element's text (its accessible name)
    fn text(&self, element: &ElementRef) -> PageResult<String>;

    /// Whether a selectable element (pivot item, toggle) is selected
    fn is_selected(&self, element: &ElementRef) -> PageResult<bool>;
}

/// An element paired with the session it was resolved against
#[derive(Clone)]
pub struct Element<'s> {
    session: &'s dyn Session,
    handle: ElementRef,
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("handle", &self.handle)
            .finish()
    }
}

impl<'s> Element<'s> {
    /// Pair a handle with its session
    #[must_use]
    pub fn new(session: &'s dyn Session, handle: ElementRef) -> Self {
        Self { session, handle }
    }

    /// The underlying handle
    #[must_use]
    pub const fn handle(&self) -> &ElementRef {
        &self.handle
    }

    /// Accessibility id this element was resolved from
    #[must_use]
    pub fn accessibility_id(&self) -> &str {
        &self.handle.accessibility_id
    }

    /// Click the element
    pub fn click(&self) -> PageResult<()> {
        debug!(accessibility_id = %self.handle.accessibility_id, "click");
        self.session.click(&self.handle)
    }

    /// Read the element's text
    pub fn text(&self) -> PageResult<String> {
        self.session.text(&self.handle)
    }

    /// Whether the element is selected
    pub fn is_selected(&self) -> PageResult<bool> {
        self.session.is_selected(&self.handle)
    }
}
