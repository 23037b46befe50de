//! Keyboard bindings configuration.

use crate::model::{KeyAction, Orientation};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Vertical keys follow what the user sees: in bottom-up layout the first
/// match is drawn lowest, so `Up` moves toward later matches.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Default bindings for the given result pane orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        let (visual_up, visual_down, visual_page_up, visual_page_down) = match orientation {
            Orientation::BottomUp => (
                KeyAction::MoveDown,
                KeyAction::MoveUp,
                KeyAction::PageDown,
                KeyAction::PageUp,
            ),
            Orientation::TopDown => (
                KeyAction::MoveUp,
                KeyAction::MoveDown,
                KeyAction::PageUp,
                KeyAction::PageDown,
            ),
        };

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Arrow key selection
        bind(KeyCode::Up, KeyModifiers::NONE, visual_up);
        bind(KeyCode::Down, KeyModifiers::NONE, visual_down);

        // Emacs-style selection
        bind(KeyCode::Char('p'), KeyModifiers::CONTROL, visual_up);
        bind(KeyCode::Char('n'), KeyModifiers::CONTROL, visual_down);

        // Page navigation
        bind(KeyCode::PageUp, KeyModifiers::NONE, visual_page_up);
        bind(KeyCode::PageDown, KeyModifiers::NONE, visual_page_down);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::First);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::Last);

        // Pattern editing
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeletePrev);
        bind(KeyCode::Char('h'), KeyModifiers::CONTROL, KeyAction::DeletePrev);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearPattern);

        // Session end
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Confirm);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Cancel);
        bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::Cancel);

        Self { bindings }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::for_orientation(Orientation::default())
    }
}
