//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::model::{MatchMode, Orientation, RecordStore};
use crate::state::{Session, SessionStatus};
use crate::view::{ScriptedEvents, TuiApp};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> and feeds events directly, one at a time, so
/// tests can assert between keystrokes.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, ScriptedEvents>,
}

/// Builder for [`AcceptanceTestHarness`].
pub struct HarnessBuilder {
    lines: Vec<String>,
    mode: MatchMode,
    orientation: Orientation,
    width: u16,
    height: u16,
}

impl HarnessBuilder {
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> AcceptanceTestHarness {
        let store: RecordStore = self.lines.into_iter().collect();
        let session = Session::new(store, self.mode, 0);
        let terminal = Terminal::new(TestBackend::new(self.width, self.height))
            .expect("TestBackend terminal never fails");
        let mut app = TuiApp::new(terminal, session, ScriptedEvents::default(), self.orientation);
        app.draw().expect("Initial render should succeed");
        AcceptanceTestHarness { app }
    }
}

impl AcceptanceTestHarness {
    /// Start building a harness over `lines` with an 80x24 terminal.
    pub fn with_lines<S: AsRef<str>>(lines: &[S]) -> HarnessBuilder {
        HarnessBuilder {
            lines: lines.iter().map(|s| s.as_ref().to_string()).collect(),
            mode: MatchMode::literal(),
            orientation: Orientation::default(),
            width: 80,
            height: 24,
        }
    }

    /// Send a single key event, redrawing like the event loop does.
    ///
    /// Returns `true` if the session is still running.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.send_event(Event::Key(KeyEvent::new(key, mods)))
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if !self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Resize the test terminal and deliver the matching resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.send_event(Event::Resize(width, height));
    }

    fn send_event(&mut self, event: Event) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.app.handle_event(event) && self.is_running() {
            self.app.draw().expect("Rendering should succeed in test harness");
        }
        self.is_running()
    }

    /// Access the session for assertions
    pub fn session(&self) -> &Session {
        self.app.session()
    }

    pub fn status(&self) -> SessionStatus {
        self.session().status()
    }

    /// Check if the session is still accepting input
    pub fn is_running(&self) -> bool {
        self.status().is_running()
    }

    /// Texts of the current filtered view, in order.
    pub fn matches(&self) -> Vec<&str> {
        let session = self.session();
        session.view().texts(session.store()).collect()
    }

    /// The last drawn frame as a string.
    pub fn screen(&self) -> String {
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Consume the harness, returning the confirmed record text if any.
    pub fn into_selection(self) -> Option<String> {
        self.app.into_selection()
    }
}
