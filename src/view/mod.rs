//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod events;
mod helpers;
mod input_line;
mod layout;
mod result_pane;
mod styles;

pub use events::{CrosstermEvents, EventSource, ScriptedEvents};
pub use input_line::{InputLine, SeparatorBar};
pub use layout::{pane_height, render_frame, split_areas};
pub use result_pane::ResultPane;
pub use styles::{ColorConfig, FilterStyles};

use crate::config::KeyBindings;
use crate::model::Orientation;
use crate::state::{Session, SessionStatus};
use crossterm::{
    cursor::Show,
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    ///
    /// Includes failing to enable raw mode when there is no terminal.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Raw mode and alternate screen, held for the lifetime of the session.
///
/// Restoring is idempotent and also happens on drop, so every exit path
/// (confirm, cancel, error, panic unwind) leaves the terminal usable.
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen on stderr.
    ///
    /// # Errors
    ///
    /// Fails when stdin/stderr is not a terminal. Raw mode is rolled back if
    /// the alternate screen cannot be entered.
    pub fn acquire() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        if let Err(e) = io::stderr().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        debug!("Terminal acquired");
        Ok(Self { active: true })
    }

    /// Leave the alternate screen, disable raw mode and show the cursor.
    ///
    /// Calling this more than once is a no-op.
    pub fn restore(&mut self) -> Result<(), TuiError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        // Attempt every step even if an earlier one fails.
        let raw = disable_raw_mode();
        let mut stderr = io::stderr();
        let screen = stderr
            .execute(LeaveAlternateScreen)
            .and_then(|w| w.execute(Show))
            .map(|_| ());
        raw?;
        screen?;
        debug!("Terminal restored");
        Ok(())
    }
}

/// Whether a character key with these modifiers is text rather than a chord.
///
/// AltGr arrives as `CONTROL | ALT` on Windows, so that combination types.
fn is_typed(modifiers: KeyModifiers) -> bool {
    let chord = KeyModifiers::CONTROL | KeyModifiers::ALT;
    !modifiers.intersects(chord) || modifiers.contains(chord)
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Main TUI application
///
/// Generic over backend and event source to support testing with
/// `TestBackend` and scripted events.
pub struct TuiApp<B, E>
where
    B: Backend,
    E: EventSource,
{
    terminal: Terminal<B>,
    session: Session,
    events: E,
    key_bindings: KeyBindings,
    styles: FilterStyles,
    orientation: Orientation,
}

impl<B, E> TuiApp<B, E>
where
    B: Backend,
    E: EventSource,
{
    /// Create an app around a terminal, a session and an event source.
    pub fn new(
        terminal: Terminal<B>,
        session: Session,
        events: E,
        orientation: Orientation,
    ) -> Self {
        Self {
            terminal,
            session,
            events,
            key_bindings: KeyBindings::for_orientation(orientation),
            styles: FilterStyles::new(),
            orientation,
        }
    }

    /// Run the event loop until the session is confirmed or cancelled.
    ///
    /// Each event is fully applied before the next one is read; the screen is
    /// redrawn only when an event changed something.
    pub fn run(&mut self) -> Result<SessionStatus, TuiError> {
        info!(
            records = self.session.store().len(),
            orientation = %self.orientation,
            "Session started"
        );

        self.draw()?;
        while self.session.status().is_running() {
            let event = self.events.read_event()?;
            if self.handle_event(event) && self.session.status().is_running() {
                self.draw()?;
            }
        }

        info!(status = ?self.session.status(), "Session ended");
        Ok(self.session.status())
    }

    /// Apply one terminal event.
    ///
    /// Returns `true` when the screen needs redrawing.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.session.resize(pane_height(height));
                true
            }
            _ => false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Bound keys win over typing, so `Ctrl+U` clears rather than inserting `u`.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        if let Some(action) = self.key_bindings.get(key) {
            debug!(?action, "Key action");
            return self.session.handle_action(action);
        }

        match key.code {
            KeyCode::Char(ch) if is_typed(key.modifiers) && !ch.is_control() => {
                self.session.handle_char(ch)
            }
            _ => {
                debug!(code = ?key.code, modifiers = ?key.modifiers, "Unbound key ignored");
                false
            }
        }
    }

    /// Render the current frame
    ///
    /// Reads the terminal size fresh and hands the pane height to the session
    /// before drawing.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.session.resize(pane_height(size.height));

        let session = &self.session;
        let orientation = self.orientation;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_frame(frame, session, orientation, styles))?;
        Ok(())
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Underlying terminal, mutably.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Consume the app, returning the confirmed record text if any.
    pub fn into_selection(self) -> Option<String> {
        self.session.confirmed_text().map(str::to_owned)
    }
}

/// Run an interactive session on the controlling terminal.
///
/// The UI is drawn to stderr so stdout stays free for the selection. The
/// terminal is restored before this returns, whether the loop ended normally
/// or with an error.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_session(session: Session, orientation: Orientation) -> Result<Option<String>, TuiError> {
    let mut guard = TerminalGuard::acquire()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
    let mut app = TuiApp::new(terminal, session, CrosstermEvents, orientation);

    let result = app.run();
    let restored = guard.restore();
    result?;
    restored?;

    Ok(app.into_selection())
}
