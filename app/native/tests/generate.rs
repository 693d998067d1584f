//! End-to-end tests for wallpaper generation.
//!
//! These run the library pipeline and the `quotewall` binary against
//! temporary directories.
//!
//! ```bash
//! cargo test -p quotewall --test generate
//! ```

use std::fs;
use std::path::Path;
use std::process::Command;

use chrono::NaiveDate;
use image::GenericImageView;
use quotewall_lib::config::{QuotewallConfig, RenderConfig};
use quotewall_lib::quotes::{self, Quote};
use quotewall_lib::wallpaper::{self, GenerateOptions};
use tempfile::TempDir;

const QUOTES: &str = r#"[
    {"text": "Be yourself; everyone else is already taken.", "author": "Oscar Wilde"},
    {"text": "The only way to do great work is to love what you do.", "author": "Steve Jobs"},
    {"text": "In the middle of difficulty lies opportunity.", "author": "Albert Einstein"},
    {"text": "Simplicity is the ultimate sophistication.", "author": "Leonardo da Vinci"}
]"#;

// ============================================================================
// Helpers
// ============================================================================

fn write_quotes(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("quotes.json");
    fs::write(&path, json).unwrap();
    path
}

fn options(dir: &Path, date: NaiveDate) -> GenerateOptions {
    let config = QuotewallConfig {
        quotes: write_quotes(dir, QUOTES).to_string_lossy().into_owned(),
        output: dir.join("wallpaper.png").to_string_lossy().into_owned(),
        ..Default::default()
    };
    GenerateOptions::from_config(&config, date)
}

fn quotewall(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quotewall"));
    cmd.current_dir(dir).env("HOME", dir).env("XDG_CONFIG_HOME", dir).env("RUST_LOG", "off");
    cmd
}

// ============================================================================
// Library pipeline
// ============================================================================

#[test]
fn test_generate_same_day_same_image() {
    let temp_dir = TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let options = options(temp_dir.path(), date);

    let first = wallpaper::generate(&options).unwrap();
    let first_bytes = fs::read(&options.output).unwrap();

    let second = wallpaper::generate(&options).unwrap();
    let second_bytes = fs::read(&options.output).unwrap();

    assert_eq!(first.quote, second.quote);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_generate_picks_from_collection() {
    let temp_dir = TempDir::new().unwrap();
    let collection = quotes::parse_quotes(QUOTES).unwrap();

    let mut seen = Vec::new();
    for day in 1..=28 {
        let date = NaiveDate::from_ymd_opt(2025, 2, day).unwrap();
        let report = wallpaper::generate(&options(temp_dir.path(), date)).unwrap();
        assert!(collection.contains(&report.quote));
        if !seen.contains(&report.quote) {
            seen.push(report.quote);
        }
    }
    assert!(seen.len() > 1);
}

#[test]
fn test_generate_custom_canvas() {
    let temp_dir = TempDir::new().unwrap();
    let mut options = options(temp_dir.path(), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    options.render = RenderConfig { width: 640, height: 480, ..Default::default() };

    wallpaper::generate(&options).unwrap();
    let image = image::open(&options.output).unwrap();
    assert_eq!(image.dimensions(), (640, 480));
}

#[test]
fn test_quote_of_the_day_matches_selector() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_quotes(temp_dir.path(), QUOTES);
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let collection = quotes::load_quotes(&path).unwrap();
    let expected: &Quote = quotes::select_quote_of_day(&collection, date).unwrap();
    assert_eq!(&wallpaper::quote_of_the_day(&path, date).unwrap(), expected);
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_binary_generates_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_quotes(temp_dir.path(), QUOTES);

    let output = quotewall(temp_dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Generated wallpaper.png with quote: "));
    assert!(stdout.trim_end().ends_with("..."));
    assert!(temp_dir.path().join("wallpaper.png").exists());
}

#[test]
fn test_binary_show_json() {
    let temp_dir = TempDir::new().unwrap();
    write_quotes(temp_dir.path(), QUOTES);

    let output = quotewall(temp_dir.path())
        .args(["show", "--json", "--date", "2024-07-04"])
        .env("NO_COLOR", "1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["date"], "2024-07-04");
    assert!(value["author"].is_string());
}

#[test]
fn test_binary_empty_collection_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_quotes(temp_dir.path(), "[]");

    let output = quotewall(temp_dir.path()).arg("generate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("quotewall: "));
    assert!(!temp_dir.path().join("wallpaper.png").exists());
}

#[test]
fn test_binary_missing_quotes_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = quotewall(temp_dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("quotes.json"));
}

#[test]
fn test_binary_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write_quotes(temp_dir.path(), QUOTES);
    let config = temp_dir.path().join("custom.jsonc");
    fs::write(
        &config,
        r#"{
            // Smaller canvas for the test
            "output": "small.png",
            "render": { "width": 300, "height": 400 }
        }"#,
    )
    .unwrap();

    let output = quotewall(temp_dir.path())
        .args(["--config", config.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let image = image::open(temp_dir.path().join("small.png")).unwrap();
    assert_eq!(image.dimensions(), (300, 400));
}
