//! Quote collection loading and quote-of-the-day selection.
//!
//! The collection is a JSON array of `{ "text": ..., "author": ... }` objects.
//! Entries are validated one by one so a bad entry can be reported by index.

mod selector;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use selector::{day_seed, select_quote_of_day, today};

/// A single quote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote body. Never empty once loaded.
    pub text: String,
    /// Who said it.
    pub author: String,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self { text: text.into(), author: author.into() }
    }
}

/// Errors that can occur while loading or selecting quotes.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The quote source is absent or unreadable.
    #[error("Failed to read quote file {}: {source}", path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The quote source is not a JSON array.
    #[error("Invalid quote collection: {0}")]
    InvalidJson(String),
    /// An entry is missing a required field or has the wrong type.
    #[error("Malformed quote at index {index}: {reason}")]
    MalformedQuote { index: usize, reason: String },
    /// There are no quotes to choose from.
    #[error("Quote collection is empty")]
    EmptyCollection,
}

/// Loads and validates the quote collection at `path`.
///
/// # Errors
///
/// Returns `MissingInputFile` if the file cannot be read, `InvalidJson` if it
/// is not a JSON array, or `MalformedQuote` for the first invalid entry.
pub fn load_quotes(path: &Path) -> Result<Vec<Quote>, QuoteError> {
    let contents = fs::read_to_string(path).map_err(|source| QuoteError::MissingInputFile {
        path: path.to_path_buf(),
        source,
    })?;

    let quotes = parse_quotes(&contents)?;
    tracing::debug!(path = %path.display(), count = quotes.len(), "quotes: loaded collection");
    Ok(quotes)
}

/// Parses and validates a JSON quote collection.
///
/// # Errors
///
/// Returns `InvalidJson` if the input is not a JSON array, or `MalformedQuote`
/// naming the first entry that lacks a string `text` or `author`.
pub fn parse_quotes(json: &str) -> Result<Vec<Quote>, QuoteError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| QuoteError::InvalidJson(err.to_string()))?;

    let Value::Array(entries) = value else {
        return Err(QuoteError::InvalidJson("expected a JSON array of quotes".to_string()));
    };

    entries.iter().enumerate().map(|(index, entry)| parse_entry(index, entry)).collect()
}

/// Validates a single collection entry.
fn parse_entry(index: usize, entry: &Value) -> Result<Quote, QuoteError> {
    let malformed = |reason: &str| QuoteError::MalformedQuote { index, reason: reason.to_string() };

    let Value::Object(fields) = entry else {
        return Err(malformed("expected an object"));
    };

    let text = match fields.get("text") {
        Some(Value::String(text)) => text,
        Some(_) => return Err(malformed("field `text` must be a string")),
        None => return Err(malformed("missing field `text`")),
    };

    let author = match fields.get("author") {
        Some(Value::String(author)) => author,
        Some(_) => return Err(malformed("field `author` must be a string")),
        None => return Err(malformed("missing field `author`")),
    };

    if text.trim().is_empty() {
        return Err(malformed("field `text` is empty"));
    }

    Ok(Quote::new(text.clone(), author.clone()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_quotes_basic() {
        let json = r#"[
            {"text": "Be yourself.", "author": "Oscar Wilde"},
            {"text": "Stay hungry.", "author": "Stewart Brand"}
        ]"#;

        let quotes = parse_quotes(json).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], Quote::new("Be yourself.", "Oscar Wilde"));
        assert_eq!(quotes[1].author, "Stewart Brand");
    }

    #[test]
    fn test_parse_quotes_preserves_order() {
        let json = r#"[
            {"text": "c", "author": "3"},
            {"text": "a", "author": "1"},
            {"text": "b", "author": "2"}
        ]"#;

        let quotes = parse_quotes(json).unwrap();
        let texts: Vec<_> = quotes.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_parse_quotes_ignores_extra_fields() {
        let json = r#"[{"text": "Hi", "author": "Me", "tags": ["x"]}]"#;
        let quotes = parse_quotes(json).unwrap();
        assert_eq!(quotes[0], Quote::new("Hi", "Me"));
    }

    #[test]
    fn test_parse_quotes_empty_array_is_ok() {
        // Emptiness is rejected at selection time, not load time
        let quotes = parse_quotes("[]").unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_parse_quotes_invalid_json() {
        let err = parse_quotes("[{").unwrap_err();
        assert!(matches!(err, QuoteError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_quotes_not_an_array() {
        let err = parse_quotes(r#"{"text": "a", "author": "b"}"#).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_quotes_missing_author_names_index() {
        let json = r#"[
            {"text": "fine", "author": "ok"},
            {"text": "no author"}
        ]"#;

        let err = parse_quotes(json).unwrap_err();
        match err {
            QuoteError::MalformedQuote { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("author"));
            }
            other => panic!("Expected MalformedQuote, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_quotes_missing_text() {
        let err = parse_quotes(r#"[{"author": "nobody"}]"#).unwrap_err();
        assert!(err.to_string().contains("index 0"));
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn test_parse_quotes_non_string_field() {
        let err = parse_quotes(r#"[{"text": 42, "author": "x"}]"#).unwrap_err();
        assert!(matches!(err, QuoteError::MalformedQuote { index: 0, .. }));
    }

    #[test]
    fn test_parse_quotes_non_object_entry() {
        let err = parse_quotes(r#"["just a string"]"#).unwrap_err();
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_parse_quotes_blank_text_is_malformed() {
        let err = parse_quotes(r#"[{"text": "   ", "author": "x"}]"#).unwrap_err();
        assert!(matches!(err, QuoteError::MalformedQuote { index: 0, .. }));
    }

    #[test]
    fn test_load_quotes_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.json");

        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"[{{"text": "Be yourself.", "author": "Oscar Wilde"}}]"#).unwrap();

        let quotes = load_quotes(&path).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "Be yourself.");
    }

    #[test]
    fn test_load_quotes_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let err = load_quotes(&path).unwrap_err();
        assert!(matches!(err, QuoteError::MissingInputFile { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
