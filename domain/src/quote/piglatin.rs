//! Single-word pig latin conversion.

const VOWELS: &str = "aeiou";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c.to_ascii_lowercase())
}

/// Convert one word token to pig latin.
///
/// - Vowel-initial words get `"way"` appended: `apple` → `appleway`
/// - Otherwise the leading consonant cluster moves to the end, followed by
///   `"ay"`: `hello` → `ellohay`, `string` → `ingstray`
/// - A word with no vowel at all is not rotated: `rhythm` → `rhythmay`
/// - An empty token is passed through unchanged
///
/// Character case is preserved; capitalization happens at sentence level.
pub fn convert_word(word: &str) -> String {
    let Some(first) = word.chars().next() else {
        return String::new();
    };

    if is_vowel(first) {
        return format!("{}way", word);
    }

    // Stays 0 when no vowel exists, which leaves the word unrotated.
    let cluster_end = word
        .char_indices()
        .find(|&(_, c)| is_vowel(c))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let (cluster, rest) = word.split_at(cluster_end);
    format!("{}{}ay", rest, cluster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_consonant() {
        assert_eq!(convert_word("hello"), "ellohay");
        assert_eq!(convert_word("world"), "orldway");
    }

    #[test]
    fn test_consonant_cluster() {
        assert_eq!(convert_word("string"), "ingstray");
        assert_eq!(convert_word("chair"), "airchay");
    }

    #[test]
    fn test_vowel_start() {
        assert_eq!(convert_word("apple"), "appleway");
        assert_eq!(convert_word("Every"), "Everyway");
    }

    #[test]
    fn test_vowel_check_is_case_insensitive() {
        assert_eq!(convert_word("Under"), "Underway");
        assert_eq!(convert_word("thEm"), "Emthay");
    }

    #[test]
    fn test_case_preserved_through_rotation() {
        assert_eq!(convert_word("Hello"), "elloHay");
    }

    #[test]
    fn test_no_vowel_is_not_rotated() {
        assert_eq!(convert_word("rhythm"), "rhythmay");
        assert_eq!(convert_word("b"), "bay");
    }

    #[test]
    fn test_y_is_not_a_vowel() {
        assert_eq!(convert_word("yes"), "esyay");
    }

    #[test]
    fn test_punctuation_rides_along() {
        assert_eq!(convert_word("world!"), "orld!way");
    }

    #[test]
    fn test_empty_passes_through() {
        assert_eq!(convert_word(""), "");
    }
}
