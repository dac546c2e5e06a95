//! CLI command definitions

use clap::{Parser, ValueEnum};
use quotebook_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for quote listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown bullet list, ready to paste into chat
    Markdown,
    /// JSON array with source text and variant
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => DomainOutputFormat::Markdown,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for quotebook
#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(author, version, about = "Collect quotes, optionally uwu-ified or in pig latin")]
#[command(long_about = r#"
Quotebook collects quotes and can restyle them before storing.

Commands:
  quote <text>            Add a quote as-is
  quote uwu <text>        Add an uwu-ified quote
  quote piglatin <text>   Add a pig latin quote
  quote list              List stored quotes

Without a COMMAND an interactive session starts. Quotes live only for the
length of the process.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./quotebook.toml       Project-level config
3. ~/.config/quotebook/config.toml   Global config

Example:
  quotebook quote piglatin "hello world"
  quotebook -o json
"#)]
pub struct Cli {
    /// Run a single command instead of starting the interactive session
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Format used by `quote list`
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The one-shot command line, if any words were given
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
