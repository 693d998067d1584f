//! CLI module for Quotewall.
//!
//! Running `quotewall` without a subcommand generates today's wallpaper.
//! The other subcommands inspect the selection or the configuration.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;
use tracing_subscriber::EnvFilter;

use crate::error::QuotewallError;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr log subscriber.
///
/// Safe to call more than once; later calls are ignored.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), QuotewallError> {
    let cli = Cli::parse();
    init_logging();
    cli.execute()
}
