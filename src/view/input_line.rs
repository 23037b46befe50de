//! Separator and input row widgets.

use crate::view::constants::{PROMPT, SEPARATOR_CHAR};
use crate::view::helpers::{display_width, tail_to_width};
use crate::view::styles::FilterStyles;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Horizontal rule between result pane and input row.
///
/// Carries a right-aligned `matched/total` counter when there is room for it.
pub struct SeparatorBar<'a> {
    matched: usize,
    total: usize,
    styles: &'a FilterStyles,
}

impl<'a> SeparatorBar<'a> {
    /// Separator showing `matched` of `total` records.
    pub fn new(matched: usize, total: usize, styles: &'a FilterStyles) -> Self {
        Self {
            matched,
            total,
            styles,
        }
    }
}

impl Widget for SeparatorBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let width = usize::from(area.width);
        let rule: String = std::iter::repeat(SEPARATOR_CHAR).take(width).collect();
        buf.set_string(area.x, area.y, rule, self.styles.separator);

        let label = format!(" {}/{} ", self.matched, self.total);
        let label_width = display_width(&label);
        // Keep one rule character to the right of the counter.
        if label_width < width {
            let offset = (width - label_width - 1) as u16;
            buf.set_string(area.x + offset, area.y, label, self.styles.counter);
        }
    }
}

/// Prompt row showing the pattern typed so far.
///
/// When the pattern is wider than the row, its tail is shown so the most
/// recent keystrokes stay visible.
pub struct InputLine<'a> {
    pattern: &'a str,
    styles: &'a FilterStyles,
}

impl<'a> InputLine<'a> {
    /// Input row showing `pattern` after the prompt.
    pub fn new(pattern: &'a str, styles: &'a FilterStyles) -> Self {
        Self { pattern, styles }
    }

    /// Visible part of the pattern and its width, leaving one column for the cursor.
    fn visible_pattern(&self, area: Rect) -> (String, usize) {
        let room = usize::from(area.width).saturating_sub(display_width(PROMPT) + 1);
        tail_to_width(self.pattern, room)
    }

    /// Terminal cursor position just after the pattern.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let (_, pattern_width) = self.visible_pattern(area);
        let column = (display_width(PROMPT) + pattern_width) as u16;
        let column = column.min(area.width.saturating_sub(1));
        (area.x + column, area.y)
    }
}

impl Widget for InputLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (visible, _) = self.visible_pattern(area);
        let (x, _) = buf.set_stringn(
            area.x,
            area.y,
            PROMPT,
            usize::from(area.width),
            self.styles.prompt,
        );
        let remaining = usize::from(area.right().saturating_sub(x));
        buf.set_stringn(x, area.y, visible, remaining, self.styles.pattern);
    }
}
