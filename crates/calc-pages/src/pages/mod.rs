//! Page objects for the calculator's screens and panels.
//!
//! The scientific-mode page aggregates the panels by containment; every panel
//! borrows the same session.

mod history;
mod memory;
mod navigation;
mod operators;
mod scientific;

pub use history::HistoryPanel;
pub use memory::MemoryPanel;
pub use navigation::NavigationMenu;
pub use operators::OperatorsPanel;
pub use scientific::ScientificCalculatorPage;
