// Letter classification and word normalization for English spelling

// ---------------------------------------------------------------------------
// English letter classes
// ---------------------------------------------------------------------------

/// Letters that form orthographic vowel groups. `y` counts as a vowel
/// everywhere, including word-initially.
pub const VOWEL_LETTERS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Check whether a character is an orthographic vowel letter.
///
/// Only lowercase ASCII letters are recognized; callers normalize first.
pub fn is_vowel_letter(c: char) -> bool {
    VOWEL_LETTERS.contains(&c)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a raw token into a syllabifiable word.
///
/// ASCII letters are lowercased and every other character is dropped, so
/// `"Don't!"` becomes `"dont"`. The result may be empty.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Check whether a word is already in normalized form (`[a-z]*`).
pub fn is_normalized(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Vowel tests --

    #[test]
    fn vowel_letters() {
        for c in ['a', 'e', 'i', 'o', 'u', 'y'] {
            assert!(is_vowel_letter(c), "{c} should be a vowel letter");
        }
        assert!(!is_vowel_letter('b'));
        assert!(!is_vowel_letter('w'));
        assert!(!is_vowel_letter('A'));
    }

    // -- Normalization --

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize_word("Hello"), "hello");
        assert_eq!(normalize_word("Don't!"), "dont");
        assert_eq!(normalize_word("  co-op  "), "coop");
    }

    #[test]
    fn normalize_drops_non_ascii_letters() {
        assert_eq!(normalize_word("caf\u{00E9}"), "caf");
        assert_eq!(normalize_word("na\u{00EF}ve"), "nave");
    }

    #[test]
    fn normalize_can_be_empty() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("1234 -- !!"), "");
    }

    #[test]
    fn normalized_check() {
        assert!(is_normalized("hello"));
        assert!(is_normalized(""));
        assert!(!is_normalized("Hello"));
        assert!(!is_normalized("co-op"));
    }
}
