//! Quote text assembly from command tokens.

use super::transform::{MAX_QUOTE_LENGTH, char_len};
use crate::core::error::DomainError;

/// Quotation marks stripped from the assembled text (straight and curly).
const QUOTE_MARKS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

/// Join command tokens into normalized quote text.
///
/// Tokens are joined with single spaces, then every quotation mark is
/// removed. Fails when the result exceeds [`MAX_QUOTE_LENGTH`] characters.
pub fn build_quote_text<S: AsRef<str>>(parts: &[S]) -> Result<String, DomainError> {
    let joined = parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    let text: String = joined.chars().filter(|c| !QUOTE_MARKS.contains(c)).collect();

    let length = char_len(&text);
    if length > MAX_QUOTE_LENGTH {
        return Err(DomainError::QuoteTooLong {
            length,
            max: MAX_QUOTE_LENGTH,
        });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_single_space() {
        assert_eq!(build_quote_text(&["hello", "world"]).unwrap(), "hello world");
    }

    #[test]
    fn test_strips_straight_quotes() {
        assert_eq!(
            build_quote_text(&["\"hello", "world\""]).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_strips_curly_quotes() {
        assert_eq!(
            build_quote_text(&["\u{201C}hello", "world\u{201D}"]).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_empty_tokens_keep_their_spaces() {
        assert_eq!(build_quote_text(&["a", "", "b"]).unwrap(), "a  b");
    }

    #[test]
    fn test_no_parts_is_empty_text() {
        let parts: [&str; 0] = [];
        assert_eq!(build_quote_text(&parts).unwrap(), "");
    }

    #[test]
    fn test_length_counted_after_stripping() {
        let word = "a".repeat(MAX_QUOTE_LENGTH);
        let quoted = format!("\"{}\"", word);
        assert_eq!(build_quote_text(&[quoted]).unwrap(), word);
    }

    #[test]
    fn test_too_long_fails() {
        let word = "a".repeat(MAX_QUOTE_LENGTH + 1);
        let err = build_quote_text(&[word]).unwrap_err();
        assert_eq!(
            err,
            DomainError::QuoteTooLong {
                length: MAX_QUOTE_LENGTH + 1,
                max: MAX_QUOTE_LENGTH
            }
        );
    }
}
