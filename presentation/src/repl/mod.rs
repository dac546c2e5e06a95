//! Interactive quote session
//!
//! Provides a readline-based loop that feeds each line to the command use case.

mod quote_repl;

pub use quote_repl::QuoteRepl;
