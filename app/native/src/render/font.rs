//! Font loading, measurement and glyph drawing.
//!
//! Two kinds of faces are supported:
//! - Outline fonts (TrueType/OpenType) read with `ttf-parser` and rasterized
//!   with `ab_glyph_rasterizer`.
//! - A built-in 8x8 bitmap font, used whenever an outline font is missing or
//!   cannot be parsed. Falling back never fails the render.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph_rasterizer::{Point, Rasterizer, point};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use thiserror::Error;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::config::RenderConfig;

/// Side length of a built-in glyph cell, in font pixels.
const BUILTIN_CELL: u32 = 8;

/// Errors that can occur while loading a font file.
///
/// These never reach the caller of [`FontFace::load_or_builtin`]; they are
/// logged and replaced by the built-in font.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file is absent or unreadable.
    #[error("Font unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exists but is not a font `ttf-parser` understands.
    #[error("Font at {} could not be parsed: {reason}", path.display())]
    Unparsable { path: PathBuf, reason: String },
}

/// A TrueType/OpenType face scaled to a pixel size.
#[derive(Clone)]
pub struct OutlineFont {
    data: Vec<u8>,
    /// Pixels per font unit.
    scale: f32,
    /// Distance from the line top to the baseline, in pixels.
    ascender: f32,
    /// Distance from the baseline to the line bottom (negative), in pixels.
    descender: f32,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("data_len", &self.data.len())
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl OutlineFont {
    /// Reads and parses a font file at the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns `FontError::Unavailable` if the file cannot be read and
    /// `FontError::Unparsable` if it is not a valid font.
    pub fn load(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = fs::read(path)
            .map_err(|source| FontError::Unavailable { path: path.to_path_buf(), source })?;

        Self::from_bytes(data, size).map_err(|reason| FontError::Unparsable {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses font data at the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse failure.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self, String> {
        let (scale, ascender, descender) = {
            let face = Face::parse(&data, 0).map_err(|err| err.to_string())?;
            let scale = size / f32::from(face.units_per_em());
            (
                scale,
                f32::from(face.ascender()) * scale,
                f32::from(face.descender()) * scale,
            )
        };

        Ok(Self { data, scale, ascender, descender })
    }

    /// Re-borrows the parsed face. Parsing only reads the table directory.
    fn face(&self) -> Option<Face<'_>> { Face::parse(&self.data, 0).ok() }

    fn glyph_for(face: &Face<'_>, c: char) -> GlyphId {
        face.glyph_index(c).unwrap_or(GlyphId(0))
    }

    fn advance(&self, face: &Face<'_>, glyph: GlyphId) -> f32 {
        f32::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * self.scale
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn measure(&self, text: &str) -> u32 {
        let Some(face) = self.face() else {
            return 0;
        };

        let width: f32 = text.chars().map(|c| self.advance(&face, Self::glyph_for(&face, c))).sum();
        width.ceil().max(0.0) as u32
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn line_height(&self) -> u32 { (self.ascender - self.descender).ceil().max(1.0) as u32 }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn draw(&self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        let Some(face) = self.face() else {
            return;
        };

        let baseline = y as f32 + self.ascender;
        let mut pen_x = x as f32;

        for c in text.chars() {
            let glyph = Self::glyph_for(&face, c);

            if let Some(bbox) = face.glyph_bounding_box(glyph) {
                // One pixel of slack on each side keeps rounded outline points in bounds
                let left = f32::from(bbox.x_min).mul_add(self.scale, pen_x);
                let top = f32::from(bbox.y_max).mul_add(-self.scale, baseline);
                let origin_x = left.floor() - 1.0;
                let origin_y = top.floor() - 1.0;

                let width = (f32::from(bbox.width()) * self.scale).ceil() as usize + 3;
                let height = (f32::from(bbox.height()) * self.scale).ceil() as usize + 3;

                let mut builder = GlyphBuilder::new(
                    Rasterizer::new(width, height),
                    self.scale,
                    pen_x - origin_x,
                    baseline - origin_y,
                );
                face.outline_glyph(glyph, &mut builder);

                let (origin_x, origin_y) = (origin_x as i64, origin_y as i64);
                builder.rasterizer.for_each_pixel_2d(|gx, gy, alpha| {
                    blend(canvas, origin_x + i64::from(gx), origin_y + i64::from(gy), color, alpha);
                });
            }

            pen_x += self.advance(&face, glyph);
        }
    }
}

/// Feeds `ttf-parser` outlines into the coverage rasterizer.
///
/// Font units are y-up; the rasterizer is y-down with its origin at the
/// glyph's top-left corner.
struct GlyphBuilder {
    rasterizer: Rasterizer,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    start: Point,
    last: Point,
}

impl GlyphBuilder {
    fn new(rasterizer: Rasterizer, scale: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            rasterizer,
            scale,
            offset_x,
            offset_y,
            start: point(0.0, 0.0),
            last: point(0.0, 0.0),
        }
    }

    fn map(&self, x: f32, y: f32) -> Point {
        point(x.mul_add(self.scale, self.offset_x), y.mul_add(-self.scale, self.offset_y))
    }
}

impl OutlineBuilder for GlyphBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.start = p;
        self.last = p;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.rasterizer.draw_line(self.last, p);
        self.last = p;
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p1 = self.map(x1, y1);
        let p = self.map(x, y);
        self.rasterizer.draw_quad(self.last, p1, p);
        self.last = p;
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p1 = self.map(x1, y1);
        let p2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.rasterizer.draw_cubic(self.last, p1, p2, p);
        self.last = p;
    }

    fn close(&mut self) {
        if self.last != self.start {
            self.rasterizer.draw_line(self.last, self.start);
        }
        self.last = self.start;
    }
}

/// The built-in 8x8 bitmap font, scaled by whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFont {
    scale: u32,
}

impl BuiltinFont {
    /// Picks the pixel scale for a font size.
    ///
    /// The cell advance tracks half the font size, matching the average
    /// character width the line-wrap budget assumes.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(size: f32) -> Self {
        let scale = (size / (2.0 * BUILTIN_CELL as f32)).round();
        Self { scale: if scale.is_finite() && scale >= 1.0 { scale as u32 } else { 1 } }
    }

    /// Width of one character cell in pixels.
    #[must_use]
    pub const fn advance(self) -> u32 { BUILTIN_CELL.saturating_mul(self.scale) }

    fn bitmap(c: char) -> [u8; 8] {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8])
    }

    fn measure(self, text: &str) -> u32 {
        let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        count.saturating_mul(self.advance())
    }

    const fn line_height(self) -> u32 { BUILTIN_CELL.saturating_mul(self.scale) }

    fn draw(self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        let scale = i64::from(self.scale);
        let advance = i64::from(self.advance());
        let mut pen_x = x;

        for c in text.chars() {
            for (row, bits) in (0_i64..).zip(Self::bitmap(c)) {
                for col in 0_u8..8 {
                    // Bit 0 is the leftmost pixel
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let cell_x = pen_x + i64::from(col) * scale;
                    let cell_y = y + row * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend(canvas, cell_x + dx, cell_y + dy, color, 1.0);
                        }
                    }
                }
            }
            pen_x += advance;
        }
    }
}

/// A font ready for measuring and drawing a single line of text.
#[derive(Debug, Clone)]
pub enum FontFace {
    Outline(OutlineFont),
    Builtin(BuiltinFont),
}

impl FontFace {
    /// Loads the font at `path`, falling back to the built-in font.
    ///
    /// A missing or invalid font is logged as a warning and never fails.
    #[must_use]
    pub fn load_or_builtin(path: &Path, size: f32) -> Self {
        match OutlineFont::load(path, size) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), size, "font: loaded");
                Self::Outline(font)
            }
            Err(err) => {
                tracing::warn!(error = %err, "font: unavailable, using built-in font");
                Self::builtin(size)
            }
        }
    }

    /// The built-in bitmap font at the given size.
    #[must_use]
    pub fn builtin(size: f32) -> Self { Self::Builtin(BuiltinFont::new(size)) }

    /// Returns `true` if this is the built-in fallback.
    #[must_use]
    pub const fn is_builtin(&self) -> bool { matches!(self, Self::Builtin(_)) }

    /// Exact rendered width of `text` in pixels, from glyph advances.
    #[must_use]
    pub fn measure(&self, text: &str) -> u32 {
        match self {
            Self::Outline(font) => font.measure(text),
            Self::Builtin(font) => font.measure(text),
        }
    }

    /// Height of one line of text in pixels (ascent plus descent).
    #[must_use]
    pub fn line_height(&self) -> u32 {
        match self {
            Self::Outline(font) => font.line_height(),
            Self::Builtin(font) => font.line_height(),
        }
    }

    /// Draws `text` with its line box's top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the canvas are clipped.
    pub fn draw(&self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        match self {
            Self::Outline(font) => font.draw(canvas, x, y, text, color),
            Self::Builtin(font) => font.draw(canvas, x, y, text, color),
        }
    }
}

/// The body and author faces used for one render.
#[derive(Debug, Clone)]
pub struct Fonts {
    pub body: FontFace,
    pub author: FontFace,
}

impl Fonts {
    /// Loads the body and author fonts at the configured sizes.
    ///
    /// Each face falls back to the built-in font independently.
    #[must_use]
    pub fn load(body_path: &Path, author_path: &Path, config: &RenderConfig) -> Self {
        Self {
            body: FontFace::load_or_builtin(body_path, config.body_font_size),
            author: FontFace::load_or_builtin(author_path, config.author_font_size),
        }
    }

    /// Built-in fonts only, at the configured sizes.
    #[must_use]
    pub fn builtin(config: &RenderConfig) -> Self {
        Self {
            body: FontFace::builtin(config.body_font_size),
            author: FontFace::builtin(config.author_font_size),
        }
    }
}

/// Alpha-blends `color` over the canvas pixel at `(x, y)`, if it is on the canvas.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, alpha: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let Some(pixel) = canvas.get_pixel_mut_checked(x, y) else {
        return;
    };

    let alpha = alpha.clamp(0.0, 1.0);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = f32::from(*dst).mul_add(1.0 - alpha, f32::from(src) * alpha);
        *dst = mixed.round().clamp(0.0, 255.0) as u8;
    }
}
