//! Screen layout: result pane, separator and input row.
//!
//! Pure layout logic. Nothing is cached between frames; the area is taken
//! from the frame each time.

use crate::model::Orientation;
use crate::state::Session;
use crate::view::constants::{INPUT_HEIGHT, RESERVED_ROWS, SEPARATOR_HEIGHT};
use crate::view::input_line::{InputLine, SeparatorBar};
use crate::view::result_pane::ResultPane;
use crate::view::styles::FilterStyles;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Number of result rows available in a terminal `height` rows tall.
pub fn pane_height(height: u16) -> usize {
    usize::from(height.saturating_sub(RESERVED_ROWS))
}

/// Split the screen into (result pane, separator, input row).
pub fn split_areas(area: Rect) -> (Rect, Rect, Rect) {
    let [pane, separator, input] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(SEPARATOR_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
    ])
    .areas(area);
    (pane, separator, input)
}

/// Render one complete frame of the filter screen.
pub fn render_frame(
    frame: &mut Frame,
    session: &Session,
    orientation: Orientation,
    styles: &FilterStyles,
) {
    let (pane_area, separator_area, input_area) = split_areas(frame.area());

    frame.render_widget(ResultPane::new(session, orientation, styles), pane_area);
    frame.render_widget(
        SeparatorBar::new(session.view().len(), session.store().len(), styles),
        separator_area,
    );

    let input = InputLine::new(session.pattern().as_str(), styles);
    if !input_area.is_empty() {
        frame.set_cursor_position(input.cursor_position(input_area));
    }
    frame.render_widget(input, input_area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
