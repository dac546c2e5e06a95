//! In-memory quote store.
//!
//! Holds quotes for the lifetime of the process only; nothing is persisted.

use quotebook_application::ports::quote_store::{QuoteStore, StoreError};
use quotebook_domain::{DuplicatePolicy, Quote, RenderedTextMatch};
use tracing::debug;

/// Ordered quote collection with a pluggable duplicate policy.
pub struct InMemoryQuoteStore<P: DuplicatePolicy = RenderedTextMatch> {
    quotes: Vec<Quote>,
    policy: P,
}

impl InMemoryQuoteStore {
    /// Create an empty store that rejects identical rendered text
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::with_policy(RenderedTextMatch)
    }
}

impl<P: DuplicatePolicy> InMemoryQuoteStore<P> {
    /// Create an empty store using `policy` for duplicate detection
    pub fn with_policy(policy: P) -> Self {
        Self {
            quotes: Vec::new(),
            policy,
        }
    }

    /// Whether `candidate` would be rejected as a duplicate
    pub fn contains(&self, candidate: &Quote) -> bool {
        self.quotes
            .iter()
            .any(|existing| self.policy.is_duplicate(existing, candidate))
    }
}

impl<P: DuplicatePolicy> QuoteStore for InMemoryQuoteStore<P> {
    fn add(&mut self, quote: Quote) -> Result<(), StoreError> {
        if self.contains(&quote) {
            return Err(StoreError::DuplicateEntry(quote.rendered().to_string()));
        }
        self.quotes.push(quote);
        debug!("Quote store now holds {} quotes", self.quotes.len());
        Ok(())
    }

    fn list(&self) -> &[Quote] {
        &self.quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_domain::{VariantMode, render};

    fn quote(text: &str, mode: VariantMode) -> Quote {
        Quote::from_rendering(render(text, mode).unwrap())
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryQuoteStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_and_list_in_order() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("one", VariantMode::Normal)).unwrap();
        store.add(quote("two", VariantMode::Normal)).unwrap();
        let rendered: Vec<&str> = store.list().iter().map(|q| q.rendered()).collect();
        assert_eq!(rendered, vec!["one", "two"]);
    }

    #[test]
    fn test_duplicate_rejected_once_stored() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("hello", VariantMode::Normal)).unwrap();
        let err = store.add(quote("hello", VariantMode::Normal)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateEntry("hello".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_source_different_variant_is_not_duplicate() {
        let mut store = InMemoryQuoteStore::new();
        store.add(quote("hello", VariantMode::Normal)).unwrap();
        store.add(quote("hello", VariantMode::Uwu)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_injected_policy() {
        let by_source = |a: &Quote, b: &Quote| a.source() == b.source();
        let mut store = InMemoryQuoteStore::with_policy(by_source);
        store.add(quote("hello", VariantMode::Normal)).unwrap();
        assert!(store.add(quote("hello", VariantMode::Uwu)).is_err());
        assert_eq!(store.len(), 1);
    }
}
