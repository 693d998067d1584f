//! Text block placement on the canvas.
//!
//! Layout is computed before anything is drawn, so it can be inspected and
//! tested on its own.

use super::font::{FontFace, Fonts};
use super::wrap::{chars_per_line, wrap_text};
use crate::config::RenderConfig;
use crate::constants::AUTHOR_PREFIX;

/// One row of text with its position on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    /// Left edge in pixels. Negative when the line is wider than the canvas.
    pub x: i64,
    /// Top edge in pixels.
    pub y: i64,
    /// Measured width in pixels.
    pub width: u32,
    /// Line box height in pixels.
    pub height: u32,
}

/// The full text block: wrapped body lines followed by the author line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub lines: Vec<PlacedLine>,
    pub author: PlacedLine,
    /// Top of the first body line. Negative when the block overflows the canvas.
    pub top: i64,
    /// Height of the whole block, body plus gap plus author line.
    pub block_height: u64,
    /// Character budget the body was wrapped to.
    pub chars_per_line: usize,
}

/// Left edge that centers `width` pixels on a canvas `canvas_width` wide.
#[must_use]
pub fn centered_x(canvas_width: u32, width: u32) -> i64 {
    (i64::from(canvas_width) - i64::from(width)) / 2
}

fn place(font: &FontFace, text: String, canvas_width: u32, y: i64) -> PlacedLine {
    let width = font.measure(&text);
    PlacedLine { x: centered_x(canvas_width, width), y, width, height: font.line_height(), text }
}

/// Lays out a quote and its author.
///
/// Runs of whitespace in `text` are collapsed to single spaces before
/// wrapping. The body is wrapped to the character budget, and every line is
/// centered horizontally using its measured width. The block as a whole is
/// centered vertically.
#[must_use]
pub fn compute_layout(text: &str, author: &str, config: &RenderConfig, fonts: &Fonts) -> Layout {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let budget = chars_per_line(config);
    let wrapped = wrap_text(&normalized, budget);

    let body_step = u64::from(fonts.body.line_height()) + u64::from(config.line_padding);
    let author_height = u64::from(fonts.author.line_height());
    let line_count = wrapped.len() as u64;
    let block_height = line_count * body_step + author_height + u64::from(config.author_gap);

    let top = (i64::from(config.height) - i64::try_from(block_height).unwrap_or(i64::MAX)) / 2;
    let step = i64::try_from(body_step).unwrap_or(i64::MAX);

    let mut y = top;
    let mut lines = Vec::with_capacity(wrapped.len());
    for line in wrapped {
        lines.push(place(&fonts.body, line, config.width, y));
        y = y.saturating_add(step);
    }

    let author_y = y.saturating_add(i64::from(config.author_gap));
    let author = place(&fonts.author, format!("{AUTHOR_PREFIX}{author}"), config.width, author_y);

    Layout { lines, author, top, block_height, chars_per_line: budget }
}
