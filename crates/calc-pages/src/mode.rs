//! Calculator modes and the UI surfaces that identify them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Accessibility id of the main result display
pub const CALCULATOR_RESULTS_ID: &str = "CalculatorResults";

/// A UI configuration the calculator can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorMode {
    /// Basic arithmetic
    Standard,
    /// Scientific functions
    Scientific,
    /// Function plotting
    Graphing,
    /// Integer bases and bitwise operations
    Programmer,
    /// Date difference and offset
    Date,
    /// Currency converter
    Currency,
    /// Volume converter
    Volume,
    /// Length converter
    Length,
    /// Weight and mass converter
    Weight,
    /// Temperature converter
    Temperature,
}

impl CalculatorMode {
    /// Every mode, in navigation-menu order
    pub const ALL: [Self; 10] = [
        Self::Standard,
        Self::Scientific,
        Self::Graphing,
        Self::Programmer,
        Self::Date,
        Self::Currency,
        Self::Volume,
        Self::Length,
        Self::Weight,
        Self::Temperature,
    ];

    /// Mode name, also used as the navigation-menu item's accessibility id
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Scientific => "Scientific",
            Self::Graphing => "Graphing",
            Self::Programmer => "Programmer",
            Self::Date => "Date",
            Self::Currency => "Currency",
            Self::Volume => "Volume",
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Accessibility id of this mode's entry in the navigation menu
    #[must_use]
    pub const fn nav_item_id(self) -> &'static str {
        self.name()
    }

    /// Text shown by the `Header` element while this mode is active
    #[must_use]
    pub const fn header_text(self) -> &'static str {
        match self {
            Self::Date => "Date Calculation",
            Self::Weight => "Weight and Mass",
            other => other.name(),
        }
    }

    /// Accessibility id of the element that proves this mode is on screen
    #[must_use]
    pub const fn surface_id(self) -> &'static str {
        match self {
            Self::Standard | Self::Scientific | Self::Programmer => CALCULATOR_RESULTS_ID,
            Self::Graphing => "GraphingCalculator",
            Self::Date => "DateDiffAllUnitsResultLabel",
            Self::Currency | Self::Volume | Self::Length | Self::Weight | Self::Temperature => {
                "Value1"
            }
        }
    }
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calculator mode '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for CalculatorMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
