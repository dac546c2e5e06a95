//! Command line tokenizing and matching.
//!
//! A line is split on single ASCII spaces (runs of spaces yield empty
//! tokens) and matched in this order:
//!
//! | Tokens                            | Command                       |
//! |-----------------------------------|-------------------------------|
//! | `quote list`                      | [`Command::List`]             |
//! | `quote piglatin <words…>`         | [`Command::Add`] (PigLatin)   |
//! | `quote uwu <words…>`              | [`Command::Add`] (Uwu)        |
//! | `quote <words…>`                  | [`Command::Add`] (Normal)     |
//!
//! Anything else is rejected with [`DomainError::InvalidCommand`].

use crate::core::error::DomainError;
use crate::quote::VariantMode;

const SEPARATOR: char = ' ';

/// A parsed quote command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every stored quote
    List,
    /// Build a quote from `parts` in the given variant and store it
    Add {
        parts: Vec<String>,
        variant: VariantMode,
    },
}

/// Parse a command line.
pub fn parse_command(line: &str) -> Result<Command, DomainError> {
    let tokens: Vec<&str> = line.split(SEPARATOR).collect();

    let (variant, rest) = match tokens.as_slice() {
        ["quote", "list"] => return Ok(Command::List),
        ["quote", "piglatin", rest @ ..] => (VariantMode::PigLatin, rest),
        ["quote", "uwu", rest @ ..] => (VariantMode::Uwu, rest),
        ["quote", rest @ ..] => (VariantMode::Normal, rest),
        _ => return Err(DomainError::InvalidCommand(line.to_string())),
    };

    Ok(Command::Add {
        parts: rest.iter().map(|s| s.to_string()).collect(),
        variant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(parts: &[&str], variant: VariantMode) -> Command {
        Command::Add {
            parts: parts.iter().map(|s| s.to_string()).collect(),
            variant,
        }
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_command("quote list").unwrap(), Command::List);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(
            parse_command("quote piglatin hello world").unwrap(),
            add(&["hello", "world"], VariantMode::PigLatin)
        );
        assert_eq!(
            parse_command("quote uwu \"hello\"").unwrap(),
            add(&["\"hello\""], VariantMode::Uwu)
        );
        assert_eq!(
            parse_command("quote hello world").unwrap(),
            add(&["hello", "world"], VariantMode::Normal)
        );
    }

    #[test]
    fn test_list_with_trailing_words_is_a_quote() {
        assert_eq!(
            parse_command("quote list extra").unwrap(),
            add(&["list", "extra"], VariantMode::Normal)
        );
    }

    #[test]
    fn test_bare_quote_is_empty_normal_quote() {
        assert_eq!(parse_command("quote").unwrap(), add(&[], VariantMode::Normal));
    }

    #[test]
    fn test_bare_variant_keyword_has_no_parts() {
        assert_eq!(parse_command("quote uwu").unwrap(), add(&[], VariantMode::Uwu));
    }

    #[test]
    fn test_consecutive_spaces_yield_empty_tokens() {
        assert_eq!(
            parse_command("quote a  b").unwrap(),
            add(&["a", "", "b"], VariantMode::Normal)
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            parse_command("quote UWU hi").unwrap(),
            add(&["UWU", "hi"], VariantMode::Normal)
        );
        assert!(parse_command("Quote hi").is_err());
    }

    #[test]
    fn test_invalid_command() {
        let err = parse_command("unquote hello").unwrap_err();
        assert_eq!(err, DomainError::InvalidCommand("unquote hello".to_string()));
        assert!(parse_command("").is_err());
        assert!(parse_command(" quote list").is_err());
    }
}
