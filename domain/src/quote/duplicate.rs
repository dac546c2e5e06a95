//! Duplicate detection policy for quote collections.

use super::entities::Quote;

/// Decides whether a candidate quote duplicates one already stored.
///
/// Stores take a policy at construction time. Any
/// `Fn(&Quote, &Quote) -> bool` closure is a policy, which keeps tests free
/// to inject their own rule.
pub trait DuplicatePolicy {
    fn is_duplicate(&self, existing: &Quote, candidate: &Quote) -> bool;
}

/// Two quotes are duplicates when their rendered text is identical (default).
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderedTextMatch;

impl DuplicatePolicy for RenderedTextMatch {
    fn is_duplicate(&self, existing: &Quote, candidate: &Quote) -> bool {
        existing.rendered() == candidate.rendered()
    }
}

impl<F> DuplicatePolicy for F
where
    F: Fn(&Quote, &Quote) -> bool,
{
    fn is_duplicate(&self, existing: &Quote, candidate: &Quote) -> bool {
        self(existing, candidate)
    }
}
