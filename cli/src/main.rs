//! CLI entrypoint for Quotebook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quotebook_application::RunCommandUseCase;
use quotebook_domain::OutputFormat;
use quotebook_infrastructure::{ConfigLoader, FileConfig, InMemoryQuoteStore};
use quotebook_presentation::{Cli, ConsoleFormatter, OutputConfig, QuoteRepl, ReplConfig};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    debug!("Loaded configuration: {:?}", file_config);

    let (output, repl_config) = resolve_config(&cli, file_config);
    if !output.color {
        colored::control::set_override(false);
    }

    info!("Starting Quotebook");

    // === Dependency Injection ===
    let store = InMemoryQuoteStore::new();
    let mut use_case = RunCommandUseCase::new(store);

    // One-shot mode
    if let Some(line) = cli.command_line() {
        let outcome = use_case.execute(&line)?;
        println!(
            "{}",
            ConsoleFormatter::format_outcome(&outcome, output.format)
        );
        return Ok(());
    }

    let mut repl = QuoteRepl::new(use_case)
        .with_output(&output)
        .with_repl_config(repl_config);
    repl.run()?;

    Ok(())
}

/// Merge file configuration with CLI flags (flags win)
fn resolve_config(cli: &Cli, file: FileConfig) -> (OutputConfig, ReplConfig) {
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(file.output.format)
        .unwrap_or_default();

    let output = OutputConfig {
        format,
        color: file.output.color && !cli.no_color,
    };

    let history_file = file
        .repl
        .history_file
        .map(PathBuf::from)
        .or_else(ConfigLoader::default_history_path);

    let repl = ReplConfig {
        prompt: file.repl.prompt,
        history_file,
    };

    (output, repl)
}
