//! Record store loading.
//!
//! Reads the input file and applies the optional prefilter once, before the
//! interactive session starts. The store is never touched again afterwards.

use crate::filter::{Matcher, RegexMatcher};
use crate::model::error::InputError;
use crate::model::{MatchMode, RecordStore};
use std::path::Path;
use tracing::info;

pub mod file;

pub use file::FileSource;

/// Compile the `--pattern` prefilter.
///
/// The prefilter is always a regular expression; case folding follows the
/// session's `ignore_case`.
///
/// # Errors
///
/// Returns `InputError::InvalidPrefilter` if the expression does not compile.
pub fn compile_prefilter(pattern: &str, mode: MatchMode) -> Result<RegexMatcher, InputError> {
    RegexMatcher::new(pattern, mode.ignore_case).map_err(|e| InputError::InvalidPrefilter {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Build a store from raw lines, keeping only lines matched by `prefilter`.
///
/// Prefiltering narrows the store; `invert_match` applies only to the
/// interactive pattern.
pub fn build_store(lines: Vec<String>, prefilter: Option<&dyn Matcher>) -> RecordStore {
    match prefilter {
        Some(matcher) => lines
            .into_iter()
            .filter(|line| matcher.is_match(line))
            .collect(),
        None => RecordStore::new(lines),
    }
}

/// Load the record store from `path`.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::InvalidPrefilter` for a bad prefilter expression and
/// `InputError::Io` for read failures.
pub fn load_store(
    path: &Path,
    prefilter: Option<&str>,
    mode: MatchMode,
) -> Result<RecordStore, InputError> {
    // Compile first so a bad expression fails before reading a large file.
    let prefilter = prefilter
        .filter(|p| !p.is_empty())
        .map(|p| compile_prefilter(p, mode))
        .transpose()?;

    let mut source = FileSource::new(path)?;
    let lines = source.read_lines()?;
    let line_count = lines.len();

    let store = build_store(lines, prefilter.as_ref().map(|m| m as &dyn Matcher));
    info!(
        path = %source.path().display(),
        lines = line_count,
        records = store.len(),
        "Record store loaded"
    );
    Ok(store)
}
