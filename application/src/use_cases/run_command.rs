//! Run Command use case
//!
//! Dispatches a single quote command line: tokenize, assemble, render,
//! construct, and store.

use crate::ports::quote_store::{QuoteStore, StoreError};
use quotebook_domain::{
    Command, DomainError, Quote, RenderAdvisory, VariantMode, build_quote_text, parse_command,
    render,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunCommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What a successfully handled command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A new quote was stored
    Added {
        quote: Quote,
        advisory: Option<RenderAdvisory>,
    },
    /// The rendered quote was already stored; nothing changed
    Duplicate { rendered: String },
    /// Current quotes in insertion order
    Listed(Vec<Quote>),
}

/// Use case for running quote commands against a store
pub struct RunCommandUseCase<S: QuoteStore> {
    store: S,
}

impl<S: QuoteStore> RunCommandUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Parse and execute a raw command line
    pub fn execute(&mut self, line: &str) -> Result<CommandOutcome, RunCommandError> {
        let command = parse_command(line)?;
        debug!("Parsed command: {:?}", command);
        self.execute_command(command)
    }

    /// Execute an already-parsed command
    pub fn execute_command(&mut self, command: Command) -> Result<CommandOutcome, RunCommandError> {
        match command {
            Command::List => Ok(CommandOutcome::Listed(self.store.list().to_vec())),
            Command::Add { parts, variant } => self.add_quote(&parts, variant),
        }
    }

    fn add_quote(
        &mut self,
        parts: &[String],
        variant: VariantMode,
    ) -> Result<CommandOutcome, RunCommandError> {
        let text = build_quote_text(parts)?;
        let rendering = render(&text, variant)?;
        let advisory = rendering.advisory();

        if let Some(advisory) = advisory {
            warn!("{}", advisory);
        }

        let quote = Quote::from_rendering(rendering);

        match self.store.add(quote.clone()) {
            Ok(()) => {
                info!("Added {} quote: {}", variant, quote);
                Ok(CommandOutcome::Added { quote, advisory })
            }
            Err(StoreError::DuplicateEntry(rendered)) => {
                info!("Skipping duplicate quote: {}", rendered);
                Ok(CommandOutcome::Duplicate { rendered })
            }
        }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
