//! Wallpaper rendering.
//!
//! Composes a quote onto a solid background and encodes the result as PNG.
//!
//! - [`wrap`] - Character-budget line wrapping
//! - [`layout`] - Vertical and horizontal placement of the text block
//! - [`font`] - Font loading with built-in fallback, measurement and drawing

pub mod font;
pub mod layout;
pub mod wrap;

use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::RgbImage;
use thiserror::Error;

pub use font::{FontFace, Fonts};
pub use layout::{Layout, PlacedLine, compute_layout};
pub use wrap::{chars_per_line, wrap_text};

use crate::config::RenderConfig;
use crate::quotes::Quote;

/// Errors that can occur while rendering or writing a wallpaper.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The quote has no visible text.
    #[error("Cannot render a quote with empty text")]
    EmptyText,
    /// The render configuration cannot produce an image.
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
    /// PNG encoding failed.
    #[error("Failed to encode wallpaper: {0}")]
    Encode(#[from] image::ImageError),
    /// Writing the output file failed.
    #[error("Failed to write wallpaper: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks that the configuration describes a drawable canvas.
///
/// # Errors
///
/// Returns `RenderError::InvalidConfig` for a zero-sized canvas, or a font
/// size that is not a positive finite number no larger than the canvas height.
pub fn validate(config: &RenderConfig) -> Result<(), RenderError> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::InvalidConfig(format!(
            "canvas dimensions must be positive, got {}x{}",
            config.width, config.height
        )));
    }

    for (name, size) in [
        ("bodyFontSize", config.body_font_size),
        ("authorFontSize", config.author_font_size),
    ] {
        if !(size.is_finite() && size > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "{name} must be a positive number, got {size}"
            )));
        }
        if f64::from(size) > f64::from(config.height) {
            return Err(RenderError::InvalidConfig(format!(
                "{name} must not exceed the canvas height {}, got {size}",
                config.height
            )));
        }
    }

    Ok(())
}

/// Renders `quote` onto a new canvas.
///
/// The returned image always has exactly the configured dimensions. Nothing
/// is written to disk; see [`save_png`].
///
/// # Errors
///
/// Returns `RenderError::EmptyText` if the quote text is blank, or
/// `RenderError::InvalidConfig` if the configuration fails [`validate`].
pub fn render(quote: &Quote, config: &RenderConfig, fonts: &Fonts) -> Result<RgbImage, RenderError> {
    validate(config)?;

    let text = quote.text.trim();
    if text.is_empty() {
        return Err(RenderError::EmptyText);
    }

    let layout = compute_layout(text, &quote.author, config, fonts);
    tracing::debug!(
        lines = layout.lines.len(),
        top = layout.top,
        chars_per_line = layout.chars_per_line,
        "render: computed layout"
    );
    if layout.top < 0 {
        tracing::warn!(
            block_height = layout.block_height,
            canvas_height = config.height,
            "render: quote is taller than the canvas and will be clipped"
        );
    }

    let mut canvas =
        RgbImage::from_pixel(config.width, config.height, config.background_color.to_rgb());
    let color = config.text_color.to_rgb();

    for line in &layout.lines {
        fonts.body.draw(&mut canvas, line.x, line.y, &line.text, color);
    }
    fonts.author.draw(&mut canvas, layout.author.x, layout.author.y, &layout.author.text, color);

    Ok(canvas)
}

/// Encodes an image as PNG bytes.
///
/// # Errors
///
/// Returns `RenderError::Encode` if encoding fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    image.write_with_encoder(PngEncoder::new(&mut bytes))?;
    Ok(bytes)
}

/// Writes an image as PNG to `path`, replacing any existing file.
///
/// The image is encoded and written to a temporary file in the same
/// directory, then renamed over `path`. A failure leaves the previous file
/// untouched.
///
/// # Errors
///
/// Returns `RenderError::Encode` if encoding fails or `RenderError::Io` if
/// the file cannot be written.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
    let bytes = encode_png(image)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let mut file = tempfile::Builder::new().prefix(".quotewall-").suffix(".png").tempfile_in(dir)?;
    file.write_all(&bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| RenderError::Io(err.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "render: wrote wallpaper");
    Ok(())
}
