//! Selection cursor and visible window over the filtered view.
//!
//! Positions here are indices into the *filtered view*, not record ids.
//! The window is `[window_start, window_end)` with
//! `window_end = min(window_start + window_size, view_len)`.

use std::ops::Range;

/// Direction of a cursor move, in view-index terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0.
    Up,
    /// Toward the last index.
    Down,
}

/// Cursor plus scroll window.
///
/// # Invariants
/// - `cursor < max(1, view_len)`
/// - if `view_len > 0` and `window_size > 0`: `window_start <= cursor < window_end`
/// - `window_end - window_start <= window_size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    cursor: usize,
    window_start: usize,
    window_size: usize,
    view_len: usize,
}

impl Viewport {
    /// Viewport over a view of `view_len` items showing `window_size` rows.
    pub fn new(view_len: usize, window_size: usize) -> Self {
        let mut viewport = Self {
            cursor: 0,
            window_start: 0,
            window_size,
            view_len: 0,
        };
        viewport.reclamp(view_len);
        viewport
    }

    /// Cursor position in the filtered view.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible view position.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// One past the last visible view position.
    pub fn window_end(&self) -> usize {
        (self.window_start + self.window_size).min(self.view_len)
    }

    /// Rows available for records.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Length of the view the cursor ranges over.
    pub fn view_len(&self) -> usize {
        self.view_len
    }

    /// View positions currently drawn.
    pub fn visible_range(&self) -> Range<usize> {
        self.window_start..self.window_end()
    }

    /// Cursor position, or `None` when there is nothing to select.
    pub fn selected(&self) -> Option<usize> {
        (self.view_len > 0).then_some(self.cursor)
    }

    /// Adopt a freshly computed view of `view_len` items.
    ///
    /// The cursor keeps its position when still valid and is pulled to the
    /// last item otherwise. An empty view resets everything to 0.
    pub fn reclamp(&mut self, view_len: usize) {
        self.view_len = view_len;
        if view_len == 0 {
            self.cursor = 0;
            self.window_start = 0;
            return;
        }
        self.cursor = self.cursor.min(view_len - 1);
        self.scroll_to_cursor();
    }

    /// Move the cursor by `delta` items, scrolling just enough to keep it visible.
    pub fn move_by(&mut self, direction: Direction, delta: usize) {
        if self.view_len == 0 {
            return;
        }
        self.cursor = match direction {
            Direction::Up => self.cursor.saturating_sub(delta),
            Direction::Down => self.cursor.saturating_add(delta).min(self.view_len - 1),
        };
        self.scroll_to_cursor();
    }

    /// Apply a new window height (terminal rows minus reserved rows).
    pub fn resize(&mut self, window_size: usize) {
        self.window_size = window_size;
        if self.view_len > 0 {
            self.scroll_to_cursor();
        }
    }

    fn scroll_to_cursor(&mut self) {
        if self.window_size == 0 {
            self.window_start = self.cursor;
            return;
        }

        if self.cursor < self.window_start {
            self.window_start = self.cursor;
        } else if self.cursor >= self.window_start + self.window_size {
            self.window_start = self.cursor + 1 - self.window_size;
        }

        // Keep the window full when the view shrank underneath it.
        let max_start = self.view_len.saturating_sub(self.window_size);
        if self.window_start > max_start {
            self.window_start = max_start;
        }
    }
}
