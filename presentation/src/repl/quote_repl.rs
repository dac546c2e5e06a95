//! REPL (Read-Eval-Print Loop) for quote commands

use crate::ConsoleFormatter;
use crate::config::{OutputConfig, ReplConfig};
use quotebook_application::{QuoteStore, RunCommandUseCase};
use quotebook_domain::OutputFormat;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Interactive quote REPL
pub struct QuoteRepl<S: QuoteStore> {
    use_case: RunCommandUseCase<S>,
    format: OutputFormat,
    repl: ReplConfig,
}

impl<S: QuoteStore> QuoteRepl<S> {
    /// Create a new QuoteRepl
    pub fn new(use_case: RunCommandUseCase<S>) -> Self {
        Self {
            use_case,
            format: OutputFormat::default(),
            repl: ReplConfig::default(),
        }
    }

    /// Set output options
    pub fn with_output(mut self, output: &OutputConfig) -> Self {
        self.format = output.format;
        self
    }

    /// Set prompt and history options
    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.repl.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Err(e) = rl.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(&self.repl.prompt);

            match readline {
                Ok(line) => {
                    // Skip empty lines
                    if line.trim().is_empty() {
                        continue;
                    }

                    // Handle slash commands
                    if line.starts_with('/') {
                        if self.handle_command(line.trim()) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line.as_str());

                    println!("{}", self.process_line(&line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.repl.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Run one command line and return the text to display
    pub fn process_line(&mut self, line: &str) -> String {
        match self.use_case.execute(line) {
            Ok(outcome) => ConsoleFormatter::format_outcome(&outcome, self.format),
            Err(e) => ConsoleFormatter::format_error(&e),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 Quotebook                   │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  quote <text>            - Add a quote");
        println!("  quote uwu <text>        - Add an uwu-ified quote");
        println!("  quote piglatin <text>   - Add a pig latin quote");
        println!("  quote list              - List quotes");
        println!("  /help, /h, /?           - Show this help");
        println!("  /quit, /exit, /q        - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Borrow the store behind the session
    pub fn store(&self) -> &S {
        self.use_case.store()
    }
}
