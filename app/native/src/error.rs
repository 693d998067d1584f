//! Error types for Quotewall.
//!
//! Each module owns its error enum; this module provides the unified error
//! that the CLI reports before exiting.

use thiserror::Error;

use crate::config::ConfigError;
use crate::quotes::QuoteError;
use crate::render::RenderError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum QuotewallError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Quote collection could not be loaded or selected from.
    #[error(transparent)]
    Quote(#[from] QuoteError),
    /// Wallpaper could not be rendered or written.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
