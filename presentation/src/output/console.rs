//! Console output formatter for quote commands

use colored::Colorize;
use quotebook_application::{CommandOutcome, RunCommandError};
use quotebook_domain::{OutputFormat, Quote, RenderAdvisory};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the stored quotes
    pub fn format_list(quotes: &[Quote], format: OutputFormat) -> String {
        match format {
            OutputFormat::Markdown => Self::format_markdown(quotes),
            OutputFormat::Json => Self::format_json(quotes),
        }
    }

    /// One `- quote` bullet per line
    pub fn format_markdown(quotes: &[Quote]) -> String {
        quotes
            .iter()
            .map(|quote| format!("- {}", quote))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as JSON
    pub fn format_json(quotes: &[Quote]) -> String {
        serde_json::to_string_pretty(quotes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the result of a single command
    pub fn format_outcome(outcome: &CommandOutcome, format: OutputFormat) -> String {
        match outcome {
            CommandOutcome::Added { quote, advisory } => {
                let mut output = String::new();
                if let Some(advisory) = advisory {
                    output.push_str(&Self::format_advisory(advisory));
                    output.push('\n');
                }
                output.push_str(&format!("{} {}", "Added:".green().bold(), quote));
                output
            }
            CommandOutcome::Duplicate { .. } => "Quote has already been added previously"
                .yellow()
                .to_string(),
            CommandOutcome::Listed(quotes) => Self::format_list(quotes, format),
        }
    }

    pub fn format_advisory(advisory: &RenderAdvisory) -> String {
        format!("{} {}", "Warning:".yellow().bold(), advisory)
    }

    pub fn format_error(error: &RunCommandError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }
}
