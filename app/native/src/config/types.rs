//! Configuration types for Quotewall.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! built-in constants.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::Rgb;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    APP_NAME, DEFAULT_AUTHOR_FONT, DEFAULT_BODY_FONT, DEFAULT_OUTPUT_FILE, DEFAULT_QUOTES_FILE,
};

/// An opaque RGB color, written as `#RRGGBB` or `#RGB` in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Converts to an `image` pixel.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb<u8> { Rgb([self.r, self.g, self.b]) }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let hex = value.trim().trim_start_matches('#');
        let invalid = || format!("invalid hex color: {value}");

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                // #RGB expands each digit, e.g. #F80 -> #FF8800
                let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Color> for String {
    fn from(color: Color) -> Self { color.to_string() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Canvas and typography settings for rendering a wallpaper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Background fill, as `#RRGGBB`.
    #[schemars(with = "String")]
    pub background_color: Color,

    /// Text color for both the quote and the author, as `#RRGGBB`.
    #[schemars(with = "String")]
    pub text_color: Color,

    /// Quote body font size in pixels.
    pub body_font_size: f32,

    /// Author line font size in pixels.
    pub author_font_size: f32,

    /// Horizontal margin in pixels, used to estimate how many characters fit per line.
    pub margin: u32,

    /// Extra vertical space added below each body line.
    pub line_padding: u32,

    /// Vertical gap between the last body line and the author line.
    pub author_gap: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            background_color: Color::BLACK,
            text_color: Color::WHITE,
            body_font_size: 60.0,
            author_font_size: 40.0,
            margin: 100,
            line_padding: 15,
            author_gap: 30,
        }
    }
}

/// Font file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FontConfig {
    /// Font used for the quote body. A bold face is recommended.
    pub body: String,

    /// Font used for the author line.
    pub author: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            body: DEFAULT_BODY_FONT.to_string(),
            author: DEFAULT_AUTHOR_FONT.to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct QuotewallConfig {
    /// Path to the JSON quote collection. Supports `~`.
    pub quotes: String,

    /// Path the PNG wallpaper is written to. Supports `~`.
    pub output: String,

    /// Font file locations.
    pub fonts: FontConfig,

    /// Canvas and typography settings.
    pub render: RenderConfig,
}

impl Default for QuotewallConfig {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES_FILE.to_string(),
            output: DEFAULT_OUTPUT_FILE.to_string(),
            fonts: FontConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/quotewall/config.jsonc` or `config.json`, if set
/// 2. `~/.config/quotewall/config.jsonc` or `config.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let app_dir = PathBuf::from(xdg_config).join(APP_NAME);
        for filename in CONFIG_FILE_NAMES {
            paths.push(app_dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let app_dir = home.join(".config").join(APP_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::Io` if it cannot be read, or `ConfigError::Parse` if it is
/// not valid JSONC for `QuotewallConfig`.
pub fn load_config_from_path(path: &Path) -> Result<QuotewallConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: QuotewallConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Loads the configuration from the first config file found in `config_paths()`.
///
/// Returns `Ok(None)` when no file exists.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config() -> Result<Option<(QuotewallConfig, PathBuf)>, ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let config = load_config_from_path(&path)?;
            return Ok(Some((config, path)));
        }
    }

    Ok(None)
}
