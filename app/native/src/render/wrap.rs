//! Character-budget line wrapping.
//!
//! The budget is a heuristic: it assumes an average glyph is half as wide as
//! the font size. Actual glyph widths are only used later, for centering.

use crate::config::RenderConfig;

/// Ratio of the average glyph width to the font size.
const AVG_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Estimates how many characters fit on one body line.
///
/// `(width - 2 * margin) / (body_font_size * 0.5)`, rounded down and never
/// less than one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn chars_per_line(config: &RenderConfig) -> usize {
    let available = f64::from(config.width) - 2.0 * f64::from(config.margin);
    let avg_char_width = f64::from(config.body_font_size) * AVG_CHAR_WIDTH_RATIO;
    let budget = (available / avg_char_width).floor();

    if budget.is_finite() && budget >= 1.0 { budget as usize } else { 1 }
}

/// Greedily wraps `text` into lines of at most `width` characters.
///
/// Breaks happen only at single spaces, and the space at a break is dropped.
/// A word longer than `width` gets a line of its own and is never split.
/// Joining the result with `" "` gives back `text` unchanged.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut words = text.split(' ');

    // split always yields at least one item
    let first = words.next().unwrap_or_default();
    let mut current = first.to_string();
    let mut current_len = first.chars().count();

    for word in words {
        let word_len = word.chars().count();

        if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    lines.push(current);
    lines
}
