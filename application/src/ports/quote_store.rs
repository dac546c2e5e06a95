//! Quote store port
//!
//! Defines the interface for collections that hold rendered quotes.

use quotebook_domain::Quote;
use thiserror::Error;

/// Errors returned by quote stores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Quote has already been added previously: {0}")]
    DuplicateEntry(String),
}

/// Port for an ordered, deduplicated quote collection
///
/// Implementations decide what counts as a duplicate; a rejected `add`
/// must leave the collection unchanged.
pub trait QuoteStore {
    /// Append a quote, failing with [`StoreError::DuplicateEntry`] if it is already present
    fn add(&mut self, quote: Quote) -> Result<(), StoreError>;

    /// All stored quotes in insertion order
    fn list(&self) -> &[Quote];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
