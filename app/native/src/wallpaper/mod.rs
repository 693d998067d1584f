//! Quote-of-the-day wallpaper generation.
//!
//! Ties the selector and the renderer together: load the collection, pick
//! today's quote, render it, and write the image. The output file is only
//! touched once the image has been fully composed.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::{QuotewallConfig, RenderConfig};
use crate::constants::PREVIEW_CHARS;
use crate::error::QuotewallError;
use crate::platform::expand;
use crate::quotes::{self, Quote};
use crate::render::{self, Fonts};

/// Everything a single generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// JSON quote collection.
    pub quotes: PathBuf,
    /// Where the PNG is written.
    pub output: PathBuf,
    /// Calendar day the quote is picked for.
    pub date: NaiveDate,
    /// Preferred body font.
    pub body_font: PathBuf,
    /// Preferred author font.
    pub author_font: PathBuf,
    /// Canvas and typography settings.
    pub render: RenderConfig,
}

impl GenerateOptions {
    /// Builds options from a configuration for the given day.
    ///
    /// Paths are tilde-expanded.
    #[must_use]
    pub fn from_config(config: &QuotewallConfig, date: NaiveDate) -> Self {
        Self {
            quotes: expand(&config.quotes),
            output: expand(&config.output),
            date,
            body_font: expand(&config.fonts.body),
            author_font: expand(&config.fonts.author),
            render: config.render.clone(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub quote: Quote,
    pub output: PathBuf,
    pub date: NaiveDate,
    /// `true` if at least one preferred font was unavailable.
    pub used_fallback_font: bool,
}

impl GenerateReport {
    /// Human-readable status line for the run.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Generated {} with quote: {}", self.output.display(), preview(&self.quote))
    }
}

/// Returns the first characters of the quote text followed by `...`.
#[must_use]
pub fn preview(quote: &Quote) -> String {
    let head: String = quote.text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Loads the collection at `quotes_path` and returns the quote for `date`.
///
/// # Errors
///
/// Returns an error if the collection cannot be loaded or is empty.
pub fn quote_of_the_day(quotes_path: &Path, date: NaiveDate) -> Result<Quote, QuotewallError> {
    let collection = quotes::load_quotes(quotes_path)?;
    let quote = quotes::select_quote_of_day(&collection, date)?;
    Ok(quote.clone())
}

/// Runs selection, rendering, and writing as one sequence.
///
/// # Errors
///
/// Returns the first fatal error. Missing fonts are not errors.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, QuotewallError> {
    let quote = quote_of_the_day(&options.quotes, options.date)?;
    tracing::info!(date = %options.date, author = %quote.author, "wallpaper: selected quote");

    let fonts = Fonts::load(&options.body_font, &options.author_font, &options.render);
    let used_fallback_font = fonts.body.is_builtin() || fonts.author.is_builtin();

    let image = render::render(&quote, &options.render, &fonts)?;
    render::save_png(&image, &options.output)?;
    tracing::info!(path = %options.output.display(), "wallpaper: generated");

    Ok(GenerateReport {
        quote,
        output: options.output.clone(),
        date: options.date,
        used_fallback_font,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::quotes::QuoteError;

    fn options_in(dir: &Path, quotes_json: &str) -> GenerateOptions {
        let quotes = dir.join("quotes.json");
        fs::write(&quotes, quotes_json).unwrap();

        GenerateOptions {
            quotes,
            output: dir.join("wallpaper.png"),
            date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            body_font: dir.join("missing-bold.ttf"),
            author_font: dir.join("missing-regular.ttf"),
            render: RenderConfig::default(),
        }
    }

    #[test]
    fn test_preview_truncates_to_thirty_chars() {
        let quote = Quote::new("The only way to do great work is to love what you do.", "Jobs");
        assert_eq!(preview(&quote), "The only way to do great work ...");
    }

    #[test]
    fn test_preview_short_and_multibyte() {
        assert_eq!(preview(&Quote::new("Be yourself.", "Oscar Wilde")), "Be yourself....");

        let quote = Quote::new("é".repeat(40), "x");
        assert_eq!(preview(&quote).chars().count(), 33);
    }

    #[test]
    fn test_generate_writes_image() {
        let temp_dir = TempDir::new().unwrap();
        let options =
            options_in(temp_dir.path(), r#"[{"text": "Be yourself.", "author": "Oscar Wilde"}]"#);

        let report = generate(&options).unwrap();
        assert_eq!(report.quote, Quote::new("Be yourself.", "Oscar Wilde"));
        assert!(report.used_fallback_font);
        assert!(report.status_line().contains("Be yourself."));

        let image = image::open(&options.output).unwrap();
        assert_eq!((image.width(), image.height()), (1080, 1920));
    }

    #[test]
    fn test_generate_empty_collection_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(temp_dir.path(), "[]");

        let err = generate(&options).unwrap_err();
        assert!(matches!(err, QuotewallError::Quote(QuoteError::EmptyCollection)));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_generate_invalid_config_keeps_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let mut options = options_in(temp_dir.path(), r#"[{"text": "Hi", "author": "Me"}]"#);
        options.render.height = 0;
        fs::write(&options.output, b"yesterday").unwrap();

        assert!(generate(&options).is_err());
        assert_eq!(fs::read(&options.output).unwrap(), b"yesterday");
    }

    #[test]
    fn test_options_from_config_expands_paths() {
        let config = QuotewallConfig { quotes: "~/quotes.json".to_string(), ..Default::default() };
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let options = GenerateOptions::from_config(&config, date);

        assert!(!options.quotes.to_string_lossy().starts_with('~'));
        assert_eq!(options.output, PathBuf::from("wallpaper.png"));
        assert_eq!(options.date, date);
    }
}
