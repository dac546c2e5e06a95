//! Domain error types

use crate::quote::VariantMode;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quote is too long ({length} > {max} characters)")]
    QuoteTooLong { length: usize, max: usize },

    #[error("Quote was not modified by the {variant} variant")]
    NoOpTransform { variant: VariantMode },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_display() {
        let error = DomainError::QuoteTooLong {
            length: 51,
            max: 50,
        };
        assert_eq!(error.to_string(), "Quote is too long (51 > 50 characters)");
    }

    #[test]
    fn test_noop_display_names_variant() {
        let error = DomainError::NoOpTransform {
            variant: VariantMode::Uwu,
        };
        assert_eq!(error.to_string(), "Quote was not modified by the uwu variant");
    }
}
