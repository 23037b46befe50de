//! Filter engine (pure).
//!
//! Maps `(store, pattern, mode)` to the ordered subset of matching records.
//! Recomputed in full on every pattern change; nothing is cached between calls.

use crate::model::{MatchMode, RecordId, RecordStore};
use regex::{Regex, RegexBuilder};
use tracing::debug;

// ===== Matcher =====

/// Predicate over a single record's text.
pub trait Matcher {
    /// Whether `text` satisfies this matcher.
    fn is_match(&self, text: &str) -> bool;
}

/// Literal substring containment, optionally case-folded.
///
/// Case folding goes through the regex engine on the escaped pattern, so a
/// literal and a regex pattern fold the same characters the same way.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    needle: String,
    folded: Option<Regex>,
}

impl SubstringMatcher {
    /// Matcher for `pattern` as a literal substring.
    pub fn new(pattern: &str, ignore_case: bool) -> Self {
        let folded = if ignore_case {
            match RegexMatcher::new(&regex::escape(pattern), true) {
                Ok(matcher) => Some(matcher.regex),
                Err(e) => {
                    debug!(pattern, error = %e, "Literal too large to fold, matching exactly");
                    None
                }
            }
        } else {
            None
        };
        Self {
            needle: pattern.to_string(),
            folded,
        }
    }
}

impl Matcher for SubstringMatcher {
    fn is_match(&self, text: &str) -> bool {
        match &self.folded {
            Some(regex) => regex.is_match(text),
            None => text.contains(&self.needle),
        }
    }
}

/// Compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern`, folding case if requested.
    pub fn new(pattern: &str, ignore_case: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(Self { regex })
    }
}

impl Matcher for RegexMatcher {
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Build the matcher for a non-empty pattern under `mode`.
///
/// In regex mode a pattern that does not compile yet (the user is usually
/// halfway through typing it) is matched literally.
pub fn build_matcher(pattern: &str, mode: MatchMode) -> Box<dyn Matcher> {
    if mode.use_regex {
        match RegexMatcher::new(pattern, mode.ignore_case) {
            Ok(matcher) => return Box::new(matcher),
            Err(e) => {
                debug!(pattern, error = %e, "Pattern is not a valid regex, matching literally")
            }
        }
    }
    Box::new(SubstringMatcher::new(pattern, mode.ignore_case))
}

// ===== FilteredView =====

/// Ordered subset of a store, as record ids in original store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    ids: Vec<RecordId>,
}

impl FilteredView {
    /// View containing every record of `store`.
    pub fn all(store: &RecordStore) -> Self {
        Self {
            ids: store.iter().map(|(id, _)| id).collect(),
        }
    }

    /// Number of records in the view.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when no record matched.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Record id at `position` in the view.
    pub fn get(&self, position: usize) -> Option<RecordId> {
        self.ids.get(position).copied()
    }

    /// Record ids in view order.
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// Resolve the view to record text, in view order.
    pub fn texts<'s>(&'s self, store: &'s RecordStore) -> impl Iterator<Item = &'s str> + 's {
        self.ids.iter().filter_map(move |id| store.get(*id))
    }
}

// ===== Filtering =====

/// Select the records of `store` matching `pattern` under `mode`.
///
/// An empty pattern selects everything (inversion does not apply to it).
/// Otherwise a record is kept iff `matches XOR mode.invert_match`.
/// Order is always the store's order.
pub fn filter(store: &RecordStore, pattern: &str, mode: MatchMode) -> FilteredView {
    if pattern.is_empty() {
        return FilteredView::all(store);
    }

    let matcher = build_matcher(pattern, mode);
    let ids = store
        .iter()
        .filter(|(_, text)| matcher.is_match(text) != mode.invert_match)
        .map(|(id, _)| id)
        .collect();

    FilteredView { ids }
}

/// Materialise a view as a store of its own, preserving view order.
pub fn filter_as_store(store: &RecordStore, view: &FilteredView) -> RecordStore {
    view.texts(store).map(str::to_string).collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
