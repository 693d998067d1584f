//! Application-wide constants.

/// Application name, used for CLI output and config directory lookup.
pub const APP_NAME: &str = "quotewall";

/// Default quote collection path, relative to the working directory.
pub const DEFAULT_QUOTES_FILE: &str = "quotes.json";

/// Default output image path, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "wallpaper.png";

/// Preferred font for the quote body.
pub const DEFAULT_BODY_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Preferred font for the author line.
pub const DEFAULT_AUTHOR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Marker placed before the author name.
pub const AUTHOR_PREFIX: &str = "- ";

/// Number of quote characters echoed in the status line.
pub const PREVIEW_CHARS: usize = 30;
