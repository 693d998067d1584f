//! Configuration module for Quotewall.
//!
//! This module provides configuration types and loading functionality.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.
//! Running without any configuration file uses the built-in defaults.

pub mod types;

use std::path::Path;

pub use types::{
    Color, ConfigError, FontConfig, QuotewallConfig, RenderConfig, config_paths, load_config,
    load_config_from_path,
};

/// Resolves the effective configuration.
///
/// A custom path must exist. Without one, the default search paths are tried
/// and the built-in defaults are used if none exists.
///
/// # Errors
///
/// Returns an error if the custom path is missing, or if a found file cannot
/// be read or parsed.
pub fn resolve(custom_path: Option<&Path>) -> Result<QuotewallConfig, ConfigError> {
    if let Some(path) = custom_path {
        let config = load_config_from_path(path)?;
        tracing::debug!(path = %path.display(), "config: loaded custom configuration");
        return Ok(config);
    }

    match load_config()? {
        Some((config, path)) => {
            tracing::debug!(path = %path.display(), "config: loaded configuration");
            Ok(config)
        }
        None => {
            tracing::debug!("config: no configuration file found, using defaults");
            Ok(QuotewallConfig::default())
        }
    }
}
