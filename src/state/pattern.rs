//! The live filter query.

use std::fmt;

/// Query string edited one character at a time.
///
/// Only append and remove-last are supported; there is no in-line
/// cursor, so the insertion point is always the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern(String);

impl Pattern {
    /// Empty pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character.
    pub fn push(&mut self, ch: char) {
        self.0.push(ch);
    }

    /// Remove and return the last character, `None` if already empty.
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Drop the whole query. Returns `false` if it was already empty.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.0.is_empty();
        self.0.clear();
        had_content
    }

    /// Current query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
