//! Quote CLI commands.
//!
//! `generate` renders the quote of the day to an image, `show` only prints it.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use crate::cli::output;
use crate::config::QuotewallConfig;
use crate::error::QuotewallError;
use crate::platform::expand;
use crate::quotes;
use crate::wallpaper::{self, GenerateOptions};

/// Arguments for `quotewall generate`.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Day to pick the quote for (YYYY-MM-DD). Defaults to today.
    #[arg(long, short, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Quote collection to read. Overrides the configured path.
    #[arg(long, short, value_name = "PATH")]
    pub quotes: Option<String>,

    /// Image file to write. Overrides the configured path.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for `quotewall show`.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ShowArgs {
    /// Day to pick the quote for (YYYY-MM-DD). Defaults to today.
    #[arg(long, short, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Quote collection to read. Overrides the configured path.
    #[arg(long, short, value_name = "PATH")]
    pub quotes: Option<String>,

    /// Print the quote as JSON.
    #[arg(long, short)]
    pub json: bool,
}

/// JSON shape printed by `show --json`.
#[derive(Debug, Serialize)]
struct ShownQuote<'a> {
    date: NaiveDate,
    text: &'a str,
    author: &'a str,
}

fn non_blank<'a>(flag: &str, value: Option<&'a str>) -> Result<Option<&'a str>, QuotewallError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(QuotewallError::InvalidArguments(format!("--{flag} must not be empty")))
        }
        other => Ok(other),
    }
}

/// Merges command-line overrides into the configuration.
///
/// # Errors
///
/// Returns `QuotewallError::InvalidArguments` if a path override is blank.
pub fn generate_options(
    args: &GenerateArgs,
    config: &QuotewallConfig,
) -> Result<GenerateOptions, QuotewallError> {
    let mut config = config.clone();
    if let Some(quotes) = non_blank("quotes", args.quotes.as_deref())? {
        config.quotes = quotes.to_string();
    }
    if let Some(output) = non_blank("output", args.output.as_deref())? {
        config.output = output.to_string();
    }

    let date = args.date.unwrap_or_else(quotes::today);
    Ok(GenerateOptions::from_config(&config, date))
}

/// Execute `generate`.
pub fn execute_generate(args: &GenerateArgs, config: &QuotewallConfig) -> Result<(), QuotewallError> {
    let options = generate_options(args, config)?;
    let report = wallpaper::generate(&options)?;

    if report.used_fallback_font {
        tracing::info!("cli: rendered with the built-in font");
    }
    println!("{}", report.status_line());
    Ok(())
}

/// Execute `show`.
pub fn execute_show(args: &ShowArgs, config: &QuotewallConfig) -> Result<(), QuotewallError> {
    let path = expand(non_blank("quotes", args.quotes.as_deref())?.unwrap_or(&config.quotes));
    let date = args.date.unwrap_or_else(quotes::today);
    let quote = wallpaper::quote_of_the_day(&path, date)?;

    if args.json {
        let shown = ShownQuote { date, text: &quote.text, author: &quote.author };
        output::print_highlighted_json(&serde_json::to_value(shown)?)?;
    } else {
        output::print_quote(&quote, date)?;
    }

    Ok(())
}
