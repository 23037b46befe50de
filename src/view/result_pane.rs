//! Result pane widget.
//!
//! Draws the visible slice of the filtered view. Slot `i` of the pane holds
//! view position `window_start + i`; the orientation decides whether slot 0 is
//! the bottom row (growing upwards) or the top row.

use crate::model::Orientation;
use crate::state::Session;
use crate::view::constants::{SELECTED_MARKER, UNSELECTED_MARKER};
use crate::view::helpers::fit_to_width;
use crate::view::styles::FilterStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

/// Widget rendering the records inside the viewport window.
pub struct ResultPane<'a> {
    session: &'a Session,
    orientation: Orientation,
    styles: &'a FilterStyles,
}

impl<'a> ResultPane<'a> {
    /// Pane over the current window of `session`.
    pub fn new(session: &'a Session, orientation: Orientation, styles: &'a FilterStyles) -> Self {
        Self {
            session,
            orientation,
            styles,
        }
    }

    /// Screen row of pane slot `slot`.
    fn row_for_slot(&self, area: Rect, slot: u16) -> u16 {
        match self.orientation {
            Orientation::BottomUp => area.bottom() - 1 - slot,
            Orientation::TopDown => area.top() + slot,
        }
    }
}

impl Widget for ResultPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let viewport = self.session.viewport();
        let view = self.session.view();
        let store = self.session.store();
        let width = usize::from(area.width);
        let blank = " ".repeat(width);

        for slot in 0..area.height {
            let y = self.row_for_slot(area, slot);
            let position = viewport.window_start() + usize::from(slot);

            let record = (position < viewport.window_end())
                .then(|| view.get(position))
                .flatten()
                .and_then(|id| store.get(id));

            match record {
                Some(text) => {
                    let selected = viewport.selected() == Some(position);
                    let (marker, style) = if selected {
                        (SELECTED_MARKER, self.styles.selected)
                    } else {
                        (UNSELECTED_MARKER, self.styles.unselected)
                    };
                    let line = fit_to_width(&format!("{marker}{text}"), width);
                    buf.set_string(area.x, y, line, style);
                }
                None => {
                    // Stale rows from a longer previous view must not survive.
                    buf.set_string(area.x, y, &blank, Style::reset());
                }
            }
        }
    }
}
