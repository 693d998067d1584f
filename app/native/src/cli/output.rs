//! CLI output formatting utilities.
//!
//! - The quote of the day as plain colored text
//! - JSON syntax highlighting

use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::Value;

use crate::constants::AUTHOR_PREFIX;
use crate::quotes::Quote;

const INDENT: &str = "  ";

/// Prints a quote with its author and date.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_quote(quote: &Quote, date: NaiveDate) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{}", format_quote(quote, date))
}

/// Formats a quote for terminal display.
#[must_use]
pub fn format_quote(quote: &Quote, date: NaiveDate) -> String {
    format!(
        "{}\n{}{}\n{}",
        quote.text.bold(),
        AUTHOR_PREFIX.dimmed(),
        quote.author.italic(),
        date.to_string().dimmed()
    )
}

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_highlighted_json(value: &Value) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{}", highlight_json(value))
}

/// Renders a JSON value as pretty-printed, colored text.
#[must_use]
pub fn highlight_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn quoted(s: &str) -> String { Value::String(s.to_string()).to_string() }

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(s) => out.push_str(&quoted(s).green().to_string()),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                out.push_str(&INDENT.repeat(depth + 1));
                write_value(out, item, depth + 1);
                out.push_str(if i + 1 < items.len() { ",\n" } else { "\n" });
            }
            let _ = write!(out, "{}]", INDENT.repeat(depth));
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                let _ = write!(out, "{}{}: ", INDENT.repeat(depth + 1), quoted(key).cyan());
                write_value(out, item, depth + 1);
                out.push_str(if i + 1 < map.len() { ",\n" } else { "\n" });
            }
            let _ = write!(out, "{}}}", INDENT.repeat(depth));
        }
    }
}
