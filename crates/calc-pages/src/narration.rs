//! Narrator text filtering.
//!
//! The automation layer reports a control's accessible name, which for the
//! result display carries narrator-only wording ("Display is 42") that is not
//! rendered on screen.

use serde::{Deserialize, Serialize};

/// Narration prefix on the result display
pub const DISPLAY_PREFIX: &str = "Display is";

/// Strips known narrator prefixes from accessible names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NarrationFilter {
    prefixes: Vec<String>,
}

impl Default for NarrationFilter {
    fn default() -> Self {
        Self {
            prefixes: vec![DISPLAY_PREFIX.to_string()],
        }
    }
}

impl NarrationFilter {
    /// Filter with the default prefix list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with a custom prefix list
    #[must_use]
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Known prefixes
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Text as shown on screen: surrounding whitespace and the longest
    /// matching narration prefix removed. List order does not matter.
    #[must_use]
    pub fn normalize<'a>(&self, raw: &'a str) -> &'a str {
        let trimmed = raw.trim();
        self.prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .filter_map(|prefix| {
                trimmed
                    .strip_prefix(prefix.as_str())
                    .map(|rest| (prefix.len(), rest))
            })
            .max_by_key(|(len, _)| *len)
            .map_or(trimmed, |(_, rest)| rest)
            .trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_display_prefix() {
        let filter = NarrationFilter::new();
        assert_eq!(filter.normalize("Display is 42"), "42");
        assert_eq!(filter.normalize("  Display is   -3.5  "), "-3.5");
    }

    #[test]
    fn test_clean_text_unchanged() {
        let filter = NarrationFilter::new();
        assert_eq!(filter.normalize("42"), "42");
        assert_eq!(filter.normalize(""), "");
    }

    #[test]
    fn test_prefix_only_stripped_at_start() {
        let filter = NarrationFilter::new();
        assert_eq!(filter.normalize("42 Display is"), "42 Display is");
    }

    #[test]
    fn test_custom_prefixes() {
        let filter = NarrationFilter::with_prefixes(["Expression is", "Display is"]);
        assert_eq!(filter.normalize("Expression is 6 × 7 ="), "6 × 7 =");
        assert_eq!(filter.normalize("Display is 42"), "42");
        assert_eq!(filter.prefixes().len(), 2);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let filter = NarrationFilter::with_prefixes(["Display", "Display is"]);
        assert_eq!(filter.normalize("Display is 42"), "42");
        let reversed = NarrationFilter::with_prefixes(["Display is", "Display"]);
        assert_eq!(reversed.normalize("Display is 42"), "42");
        assert_eq!(filter.normalize("Display 7"), "7");
    }

    #[test]
    fn test_empty_prefix_ignored() {
        let filter = NarrationFilter::with_prefixes([""]);
        assert_eq!(filter.normalize(" 7 "), "7");
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let filter: NarrationFilter = serde_json::from_str(r#"["Display is"]"#).unwrap();
        assert_eq!(filter, NarrationFilter::default());
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(value in "[0-9,.\\-]{0,12}", pad in " {0,3}") {
            let filter = NarrationFilter::new();
            let raw = format!("{pad}Display is {value}{pad}");
            let once = filter.normalize(&raw);
            prop_assert_eq!(once, value.as_str());
            prop_assert_eq!(filter.normalize(once), once);
        }

        #[test]
        fn prop_clean_numbers_pass_through(value in "-?[0-9]{1,9}(\\.[0-9]{1,4})?") {
            let filter = NarrationFilter::new();
            prop_assert_eq!(filter.normalize(&value), value.as_str());
        }
    }
}
