//! Infrastructure layer for quotebook
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat, FileReplConfig};
pub use store::InMemoryQuoteStore;
