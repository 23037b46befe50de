//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that key events are translated into.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Printable characters are not bound here; they are appended to the
/// pattern directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Move the cursor toward the first match.
    MoveUp,
    /// Move the cursor toward the last match.
    MoveDown,
    /// Move the cursor one page toward the first match.
    PageUp,
    /// Move the cursor one page toward the last match.
    PageDown,
    /// Jump to the first match.
    First,
    /// Jump to the last match.
    Last,

    // Pattern editing
    /// Remove the last pattern character. Default: Backspace
    DeletePrev,
    /// Clear the whole pattern. Default: Ctrl+u
    ClearPattern,

    // Session end
    /// Accept the record under the cursor. Default: Enter
    Confirm,
    /// Leave without a selection. Default: Esc/Ctrl+c/Ctrl+d
    Cancel,
}
