//! Terminal event sources.
//!
//! The event loop reads through [`EventSource`] so it can be driven by the
//! real terminal or by a fixed script.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use tracing::debug;

/// Blocking source of terminal events.
pub trait EventSource {
    /// Wait for the next event.
    fn read_event(&mut self) -> io::Result<Event>;
}

/// Events read from the controlling terminal.
///
/// Interrupted reads (e.g. a signal arriving mid-read) are retried.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn read_event(&mut self) -> io::Result<Event> {
        loop {
            match event::read() {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    debug!("Event read interrupted, retrying");
                }
                other => return other,
            }
        }
    }
}

/// Replays a fixed sequence of events.
///
/// Reading past the end yields `ErrorKind::UnexpectedEof`, which ends a
/// session loop that never reached confirm or cancel.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    /// Source that replays `events` in order.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Append a key press.
    pub fn key(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.events
            .push_back(Event::Key(KeyEvent::new(code, modifiers)));
        self
    }

    /// Append one key press per character of `text`.
    pub fn text(mut self, text: &str) -> Self {
        self.events.extend(
            text.chars()
                .map(|ch| Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))),
        );
        self
    }

    /// Events not yet read.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn read_event(&mut self) -> io::Result<Event> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted")
        })
    }
}
