//! Interactive session state machine (pure).
//!
//! Owns the record store, the pattern, the current filtered view and the
//! viewport, and applies one user action at a time. Terminal I/O lives in
//! the view layer; everything here is testable without a TUI.

use crate::filter::{self, FilteredView};
use crate::model::{KeyAction, MatchMode, RecordId, RecordStore};
use crate::state::{Direction, Pattern, Viewport};
use tracing::debug;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for the next key.
    Running,
    /// User accepted the record with this id.
    Confirmed(RecordId),
    /// User left without a selection.
    Cancelled,
}

impl SessionStatus {
    /// True until the session is confirmed or cancelled.
    pub fn is_running(self) -> bool {
        self == SessionStatus::Running
    }
}

/// Filtering session over a fixed record store.
#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    mode: MatchMode,
    pattern: Pattern,
    view: FilteredView,
    viewport: Viewport,
    status: SessionStatus,
}

impl Session {
    /// Start a session showing the whole store in a window of `window_size` rows.
    pub fn new(store: RecordStore, mode: MatchMode, window_size: usize) -> Self {
        let view = FilteredView::all(&store);
        let viewport = Viewport::new(view.len(), window_size);
        Self {
            store,
            mode,
            pattern: Pattern::new(),
            view,
            viewport,
            status: SessionStatus::Running,
        }
    }

    /// The full record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Matching options for this session.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Current pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Records matching the current pattern.
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Cursor and scroll window.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Record currently under the cursor.
    pub fn selected_record(&self) -> Option<RecordId> {
        self.viewport
            .selected()
            .and_then(|position| self.view.get(position))
    }

    /// Text of the record under the cursor.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected_record().and_then(|id| self.store.get(id))
    }

    /// Text of the confirmed record, if the session ended with a selection.
    pub fn confirmed_text(&self) -> Option<&str> {
        match self.status {
            SessionStatus::Confirmed(id) => self.store.get(id),
            _ => None,
        }
    }

    /// Append a typed character to the pattern and refilter.
    ///
    /// Returns `true` when the screen needs redrawing.
    pub fn handle_char(&mut self, ch: char) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.pattern.push(ch);
        self.refilter();
        true
    }

    /// Apply a bound action.
    ///
    /// Returns `true` when the screen needs redrawing.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        if !self.status.is_running() {
            return false;
        }

        let page = self.viewport.window_size().max(1);
        match action {
            KeyAction::MoveUp => self.viewport.move_by(Direction::Up, 1),
            KeyAction::MoveDown => self.viewport.move_by(Direction::Down, 1),
            KeyAction::PageUp => self.viewport.move_by(Direction::Up, page),
            KeyAction::PageDown => self.viewport.move_by(Direction::Down, page),
            KeyAction::First => self.viewport.move_by(Direction::Up, usize::MAX),
            KeyAction::Last => self.viewport.move_by(Direction::Down, usize::MAX),
            KeyAction::DeletePrev => {
                if self.pattern.pop().is_none() {
                    return false;
                }
                self.refilter();
            }
            KeyAction::ClearPattern => {
                if !self.pattern.clear() {
                    return false;
                }
                self.refilter();
            }
            KeyAction::Confirm => {
                let Some(id) = self.selected_record() else {
                    debug!("Confirm ignored: no matching records");
                    return false;
                };
                debug!(record = id.index(), "Selection confirmed");
                self.status = SessionStatus::Confirmed(id);
            }
            KeyAction::Cancel => {
                debug!("Session cancelled");
                self.status = SessionStatus::Cancelled;
            }
        }
        true
    }

    /// Adopt a new result-pane height.
    pub fn resize(&mut self, window_size: usize) {
        if window_size != self.viewport.window_size() {
            debug!(window_size, "Viewport resized");
            self.viewport.resize(window_size);
        }
    }

    fn refilter(&mut self) {
        self.view = filter::filter(&self.store, self.pattern.as_str(), self.mode);
        self.viewport.reclamp(self.view.len());
        debug!(
            pattern = %self.pattern,
            matched = self.view.len(),
            total = self.store.len(),
            "Refiltered"
        );
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
