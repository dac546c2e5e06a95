//! Application layer for quotebook
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::quote_store::{QuoteStore, StoreError};
pub use use_cases::run_command::{CommandOutcome, RunCommandError, RunCommandUseCase};
