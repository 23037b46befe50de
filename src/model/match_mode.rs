//! Static matching configuration shared by the prefilter and the live filter.

use serde::Serialize;

/// How a pattern is matched against record text.
///
/// Fixed for the lifetime of a session; only the pattern changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchMode {
    /// Fold case on both sides before comparing.
    pub ignore_case: bool,
    /// Select records that do NOT match.
    pub invert_match: bool,
    /// Treat the pattern as a regular expression instead of a literal substring.
    pub use_regex: bool,
}

impl MatchMode {
    /// Case-sensitive, non-inverted substring matching.
    pub fn literal() -> Self {
        Self::default()
    }

    /// Set case folding.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Set inversion.
    pub fn with_invert_match(mut self, invert_match: bool) -> Self {
        self.invert_match = invert_match;
        self
    }

    /// Set regex interpretation of the pattern.
    pub fn with_regex(mut self, use_regex: bool) -> Self {
        self.use_regex = use_regex;
        self
    }
}
