//! CLI command definitions using Clap.
//!
//! - `quote` - Generating the wallpaper and showing the quote of the day

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::{self, QuotewallConfig};
use crate::constants::APP_NAME;
use crate::error::QuotewallError;
use crate::schema;

pub mod quote;

pub use quote::{GenerateArgs, ShowArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quotewall - renders the quote of the day as a phone wallpaper.
#[derive(Parser, Debug)]
#[command(name = "quotewall")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Generate the wallpaper for a day.
    ///
    /// This is what runs when no subcommand is given.
    #[command(
        verbatim_doc_comment,
        after_long_help = r#"Examples:
  quotewall generate                                # Today's quote with configured paths
  quotewall generate --date 2024-12-25              # Quote for a specific day
  quotewall generate --quotes ~/quotes.json --output ~/Pictures/quote.png"#
    )]
    Generate(GenerateArgs),

    /// Print the quote of the day without rendering it.
    Show(ShowArgs),

    /// Output Quotewall configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Quotewall configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(quotewall completions --shell zsh)"
    ///   quotewall completions --shell bash > ~/.local/share/bash-completion/completions/quotewall
    ///   quotewall completions --shell fish > ~/.config/fish/completions/quotewall.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_deref().map(crate::platform::expand) }

    /// Loads the configuration the commands run with.
    fn load_config(&self) -> Result<QuotewallConfig, QuotewallError> {
        Ok(config::resolve(self.config_path().as_deref())?)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), QuotewallError> {
        match &self.command {
            None => quote::execute_generate(&GenerateArgs::default(), &self.load_config()?),
            Some(Commands::Generate(args)) => quote::execute_generate(args, &self.load_config()?),
            Some(Commands::Show(args)) => quote::execute_show(args, &self.load_config()?),

            Some(Commands::Schema) => {
                let schema_output = schema::print_schema();
                println!("{schema_output}");
                Ok(())
            }

            Some(Commands::Completions { shell }) => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, APP_NAME, &mut io::stdout());
    }
}
