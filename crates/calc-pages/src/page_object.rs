//! Page Object Model support.
//!
//! A page object wraps one region of the calculator UI behind named accessors
//! and operations, so tests never spell out raw accessibility ids.

use crate::locator::Locator;
use crate::result::PageResult;
use crate::session::{Element, Session};
use crate::wait::WaitOptions;

/// Trait for page objects representing a screen or panel of the calculator.
///
/// # Example
///
/// ```
/// use calc_pages::{Locator, PageObject, Session};
///
/// #[derive(Debug)]
/// struct AboutPage<'s> {
///     session: &'s dyn Session,
/// }
///
/// impl<'s> PageObject<'s> for AboutPage<'s> {
///     fn session(&self) -> &'s dyn Session {
///         self.session
///     }
///
///     fn anchor(&self) -> Locator {
///         Locator::accessibility_id("AboutFlyoutVersion")
///     }
/// }
/// ```
pub trait PageObject<'s> {
    /// Session this page resolves elements against
    fn session(&self) -> &'s dyn Session;

    /// Locator whose presence means the page is on screen
    fn anchor(&self) -> Locator;

    /// Page name for logging/debugging
    fn page_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether the anchor element is currently present
    fn is_loaded(&self) -> PageResult<bool> {
        self.anchor().is_present(self.session())
    }

    /// Poll until the anchor element is present
    fn wait_until_loaded(&self, options: &WaitOptions) -> PageResult<Element<'s>> {
        self.anchor().wait_for(self.session(), options)
    }

    /// Resolve an element against this page's session
    fn element(&self, locator: &Locator) -> PageResult<Element<'s>> {
        locator.resolve(self.session())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSession;

    #[derive(Debug)]
    struct SettingsPage<'s> {
        session: &'s dyn Session,
    }

    impl<'s> PageObject<'s> for SettingsPage<'s> {
        fn session(&self) -> &'s dyn Session {
            self.session
        }

        fn anchor(&self) -> Locator {
            Locator::accessibility_id("SettingsHeader")
        }
    }

    #[test]
    fn test_is_loaded_follows_anchor() {
        let session = MockSession::new();
        let page = SettingsPage { session: &session };
        assert!(!page.is_loaded().unwrap());

        session.update(|tree| tree.insert("SettingsHeader", "Settings"));
        assert!(page.is_loaded().unwrap());
    }

    #[test]
    fn test_wait_until_loaded() {
        let session = MockSession::new().with_element("SettingsHeader", "Settings");
        let page = SettingsPage { session: &session };
        let anchor = page
            .wait_until_loaded(&WaitOptions::new().with_timeout(0))
            .unwrap();
        assert_eq!(anchor.text().unwrap(), "Settings");
    }

    #[test]
    fn test_page_name_is_type_name() {
        let session = MockSession::new();
        let page = SettingsPage { session: &session };
        assert!(page.page_name().contains("SettingsPage"));
    }

    #[test]
    fn test_element_uses_page_session() {
        let session = MockSession::new().with_element("AppName", "Calculator");
        let page = SettingsPage { session: &session };
        let name = page
            .element(&Locator::accessibility_id("AppName"))
            .unwrap();
        assert_eq!(name.text().unwrap(), "Calculator");
        assert!(page
            .element(&Locator::accessibility_id("Missing"))
            .unwrap_err()
            .is_element_not_found());
    }
}
