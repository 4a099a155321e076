//! In-memory session for testing page objects without a desktop.
//!
//! [`MockSession`] holds a flat UI tree keyed by accessibility id. Clicks can
//! be scripted to mutate the tree, and every session call is recorded so tests
//! can assert on the exact interaction sequence.
//!
//! [`MockSession::calculator`] wires up a small scripted calculator whose
//! controls behave like the real application's accessibility tree.

use crate::mode::{CalculatorMode, CALCULATOR_RESULTS_ID};
use crate::result::{PageError, PageResult};
use crate::session::{ElementRef, Session};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Click behaviour attached to an accessibility id
pub type ClickHandler = Box<dyn Fn(&mut MockTree)>;

/// Text the scripted calculator shows after a clear
pub const CLEARED_DISPLAY: &str = "Display is 0";

/// One control in the mock UI tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockElement {
    /// Reference handed out to callers; changes when the control is re-created
    pub element_id: String,
    /// Accessible name
    pub text: String,
    /// Selection state
    pub selected: bool,
}

/// Flat UI tree keyed by accessibility id
#[derive(Debug, Clone, Default)]
pub struct MockTree {
    elements: BTreeMap<String, MockElement>,
    next_ref: u64,
}

impl MockTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control, replacing (and invalidating) any existing one with the same id
    pub fn insert(&mut self, accessibility_id: &str, text: &str) {
        self.next_ref += 1;
        let _ = self.elements.insert(
            accessibility_id.to_string(),
            MockElement {
                element_id: format!("mock-{}", self.next_ref),
                text: text.to_string(),
                selected: false,
            },
        );
    }

    /// Remove a control; returns whether it existed
    pub fn remove(&mut self, accessibility_id: &str) -> bool {
        self.elements.remove(accessibility_id).is_some()
    }

    /// Whether a control is present
    #[must_use]
    pub fn contains(&self, accessibility_id: &str) -> bool {
        self.elements.contains_key(accessibility_id)
    }

    /// Look up a control
    #[must_use]
    pub fn get(&self, accessibility_id: &str) -> Option<&MockElement> {
        self.elements.get(accessibility_id)
    }

    /// Change a control's text in place; returns whether it existed
    pub fn set_text(&mut self, accessibility_id: &str, text: &str) -> bool {
        match self.elements.get_mut(accessibility_id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Text of a control
    #[must_use]
    pub fn text(&self, accessibility_id: &str) -> Option<&str> {
        self.elements.get(accessibility_id).map(|e| e.text.as_str())
    }

    /// Change a control's selection state; returns whether it existed
    pub fn set_selected(&mut self, accessibility_id: &str, selected: bool) -> bool {
        match self.elements.get_mut(accessibility_id) {
            Some(element) => {
                element.selected = selected;
                true
            }
            None => false,
        }
    }

    /// All accessibility ids currently present, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.elements.keys().map(String::as_str).collect()
    }

    /// Number of controls
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the tree is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Rebuild the tree the way the calculator does when `mode` becomes active
    pub fn show_mode(&mut self, mode: CalculatorMode) {
        for other in CalculatorMode::ALL {
            let _ = self.remove(other.nav_item_id());
            let _ = self.remove(other.surface_id());
        }
        for id in CALCULATOR_CONTROLS {
            let _ = self.remove(id);
        }

        self.insert("Header", mode.header_text());
        if mode.surface_id() == CALCULATOR_RESULTS_ID {
            self.insert(CALCULATOR_RESULTS_ID, CLEARED_DISPLAY);
            self.insert("clearButton", "Clear");
            self.insert("clearEntryButton", "Clear entry");
            self.insert("ClearMemoryButton", "Clear all memory");
            self.insert("MemoryListView", "Memory");
            self.insert("HistoryLabel", "History");
            self.insert("ClearHistory", "Clear all history");
        } else {
            self.insert(mode.surface_id(), "");
        }
    }
}

/// Controls that only exist in the calculator modes
const CALCULATOR_CONTROLS: [&str; 8] = [
    "clearButton",
    "clearEntryButton",
    "ClearMemoryButton",
    "MemoryListView",
    "HistoryLabel",
    "ClearHistory",
    "HistoryEmpty",
    "TogglePaneButton",
];

#[derive(Debug, Default)]
struct MockState {
    tree: MockTree,
    call_history: Vec<String>,
}

/// Mock session for unit testing
#[derive(Default)]
pub struct MockSession {
    state: RefCell<MockState>,
    handlers: HashMap<String, ClickHandler>,
}

impl fmt::Debug for MockSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        let mut scripted: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        scripted.sort_unstable();
        f.debug_struct("MockSession")
            .field("elements", &state.tree.ids())
            .field("scripted_clicks", &scripted)
            .field("calls", &state.call_history.len())
            .finish()
    }
}

impl MockSession {
    /// Create an empty mock session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripted calculator currently showing `mode`.
    ///
    /// Clear buttons reset the display, memory and history clear buttons empty
    /// their panels, and the navigation pane switches modes.
    #[must_use]
    pub fn calculator(mode: CalculatorMode) -> Self {
        let mut tree = MockTree::new();
        tree.show_mode(mode);
        tree.insert("TogglePaneButton", "Open Navigation");

        let mut session = Self {
            state: RefCell::new(MockState {
                tree,
                call_history: Vec::new(),
            }),
            handlers: HashMap::new(),
        }
        .on_click("clearButton", |tree| {
            let _ = tree.set_text(CALCULATOR_RESULTS_ID, CLEARED_DISPLAY);
        })
        .on_click("clearEntryButton", |tree| {
            let _ = tree.set_text(CALCULATOR_RESULTS_ID, CLEARED_DISPLAY);
        })
        .on_click("ClearMemoryButton", |tree| {
            let _ = tree.remove("MemoryListView");
        })
        .on_click("HistoryLabel", |tree| {
            let _ = tree.set_selected("HistoryLabel", true);
        })
        .on_click("ClearHistory", |tree| {
            let _ = tree.remove("ClearHistory");
            tree.insert("HistoryEmpty", "There's no history yet");
        })
        .on_click("TogglePaneButton", |tree| {
            for mode in CalculatorMode::ALL {
                tree.insert(mode.nav_item_id(), mode.name());
            }
        });

        for target in CalculatorMode::ALL {
            session = session.on_click(target.nav_item_id(), move |tree| {
                tree.show_mode(target);
                tree.insert("TogglePaneButton", "Open Navigation");
            });
        }
        session
    }

    /// Add a control to the tree
    #[must_use]
    pub fn with_element(self, accessibility_id: &str, text: &str) -> Self {
        self.state.borrow_mut().tree.insert(accessibility_id, text);
        self
    }

    /// Set a control's selection state
    #[must_use]
    pub fn with_selected(self, accessibility_id: &str, selected: bool) -> Self {
        let _ = self
            .state
            .borrow_mut()
            .tree
            .set_selected(accessibility_id, selected);
        self
    }

    /// Script what clicking a control does, replacing any previous script
    #[must_use]
    pub fn on_click(
        mut self,
        accessibility_id: &str,
        handler: impl Fn(&mut MockTree) + 'static,
    ) -> Self {
        let _ = self
            .handlers
            .insert(accessibility_id.to_string(), Box::new(handler));
        self
    }

    /// Mutate the tree directly, as the application would on its own
    pub fn update(&self, f: impl FnOnce(&mut MockTree)) {
        f(&mut self.state.borrow_mut().tree);
    }

    /// Current text of a control
    #[must_use]
    pub fn text_of(&self, accessibility_id: &str) -> Option<String> {
        self.state
            .borrow()
            .tree
            .text(accessibility_id)
            .map(str::to_string)
    }

    /// Whether a control is present
    #[must_use]
    pub fn contains(&self, accessibility_id: &str) -> bool {
        self.state.borrow().tree.contains(accessibility_id)
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().call_history.clone()
    }

    /// Accessibility ids clicked, in order
    #[must_use]
    pub fn clicks(&self) -> Vec<String> {
        self.state
            .borrow()
            .call_history
            .iter()
            .filter_map(|call| call.strip_prefix("click:"))
            .map(str::to_string)
            .collect()
    }

    /// Number of lookups made for an accessibility id
    #[must_use]
    pub fn lookup_count(&self, accessibility_id: &str) -> usize {
        let wanted = format!("find:{accessibility_id}");
        self.state
            .borrow()
            .call_history
            .iter()
            .filter(|call| **call == wanted)
            .count()
    }

    /// Check if a call with this prefix was made
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.state
            .borrow()
            .call_history
            .iter()
            .any(|c| c.starts_with(prefix))
    }

    /// Forget recorded calls
    pub fn clear_history(&self) {
        self.state.borrow_mut().call_history.clear();
    }

    fn live<'t>(tree: &'t MockTree, element: &ElementRef) -> PageResult<&'t MockElement> {
        tree.get(&element.accessibility_id)
            .filter(|e| e.element_id == element.element_id)
            .ok_or_else(|| PageError::StaleElement {
                accessibility_id: element.accessibility_id.clone(),
            })
    }
}

impl Session for MockSession {
    fn try_find_by_accessibility_id(
        &self,
        accessibility_id: &str,
    ) -> PageResult<Option<ElementRef>> {
        let mut state = self.state.borrow_mut();
        state.call_history.push(format!("find:{accessibility_id}"));
        Ok(state
            .tree
            .get(accessibility_id)
            .map(|e| ElementRef::new(e.element_id.clone(), accessibility_id)))
    }

    fn click(&self, element: &ElementRef) -> PageResult<()> {
        let mut state = self.state.borrow_mut();
        let _ = Self::live(&state.tree, element)?;
        state
            .call_history
            .push(format!("click:{}", element.accessibility_id));
        if let Some(handler) = self.handlers.get(&element.accessibility_id) {
            handler(&mut state.tree);
        }
        Ok(())
    }

    fn text(&self, element: &ElementRef) -> PageResult<String> {
        let mut state = self.state.borrow_mut();
        let text = Self::live(&state.tree, element)?.text.clone();
        state
            .call_history
            .push(format!("text:{}", element.accessibility_id));
        Ok(text)
    }

    fn is_selected(&self, element: &ElementRef) -> PageResult<bool> {
        let mut state = self.state.borrow_mut();
        let selected = Self::live(&state.tree, element)?.selected;
        state
            .call_history
            .push(format!("selected:{}", element.accessibility_id));
        Ok(selected)
    }
}
