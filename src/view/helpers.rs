//! Text fitting helpers shared by the widgets.
//!
//! All widths are terminal display widths, not byte or char counts.

use unicode_width::UnicodeWidthChar;

/// Columns a tab expands to.
const TAB_WIDTH: usize = 4;

/// Replace characters that would corrupt the screen.
///
/// Tabs become spaces and remaining control characters become `?`.
fn sanitize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(|ch| {
        let (repeat, replacement) = match ch {
            '\t' => (TAB_WIDTH, ' '),
            c if c.is_control() => (1, '?'),
            c => (1, c),
        };
        std::iter::repeat(replacement).take(repeat)
    })
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Truncate `text` to at most `width` columns and pad it with spaces to exactly `width`.
///
/// A wide character that would straddle the edge is dropped and replaced by padding.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in sanitize(text) {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Keep the end of `text` that fits in `width` columns.
///
/// Returns the kept text and its display width. Used for the pattern, where
/// the most recently typed characters must stay visible.
pub fn tail_to_width(text: &str, width: usize) -> (String, usize) {
    let chars: Vec<char> = sanitize(text).collect();
    let mut used = 0;
    let mut start = chars.len();
    for (index, &ch) in chars.iter().enumerate().rev() {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    (chars[start..].iter().collect(), used)
}

/// Display width of `text` after sanitizing.
pub fn display_width(text: &str) -> usize {
    sanitize(text).map(char_width).sum()
}
