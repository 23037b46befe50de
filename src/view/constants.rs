//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for the fixed rows and markers drawn around the
//! result pane.

/// Height of the separator row in lines.
pub const SEPARATOR_HEIGHT: u16 = 1;

/// Height of the input row in lines.
pub const INPUT_HEIGHT: u16 = 1;

/// Rows below the result pane that are never used for records.
///
/// The result pane gets `terminal_height - RESERVED_ROWS` rows.
pub const RESERVED_ROWS: u16 = SEPARATOR_HEIGHT + INPUT_HEIGHT;

/// Marker drawn before the record under the cursor.
pub const SELECTED_MARKER: &str = "> ";

/// Marker drawn before every other visible record.
pub const UNSELECTED_MARKER: &str = "  ";

/// Prompt drawn before the pattern on the input row.
pub const PROMPT: &str = "> ";

/// Fill character of the separator row.
pub const SEPARATOR_CHAR: char = '─';
