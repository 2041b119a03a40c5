// Phoneme tokens in ARPAbet-style notation
//
// Vowel phonemes carry a trailing stress digit (`AH0`, `OW1`, `EH2`);
// consonant phonemes carry none (`HH`, `L`, `NG`).

/// One pronunciation: an ordered list of phoneme tokens.
pub type Pronunciation = Vec<String>;

/// Error for a token that cannot be a phoneme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhonemeError {
    #[error("empty phoneme token")]
    Empty,
    #[error("invalid character {found:?} in phoneme {token:?}")]
    InvalidCharacter { token: String, found: char },
    #[error("phoneme {0:?} does not start with a letter")]
    MissingSymbol(String),
}

/// A token is a vowel phoneme iff its last character is an ASCII digit.
pub fn is_vowel_phoneme(token: &str) -> bool {
    token.chars().next_back().is_some_and(|c| c.is_ascii_digit())
}

/// Count the vowel phonemes in a sequence.
pub fn count_vowel_phonemes<S: AsRef<str>>(phonemes: &[S]) -> usize {
    phonemes
        .iter()
        .filter(|p| is_vowel_phoneme(p.as_ref()))
        .count()
}

/// Check that a token looks like a phoneme: an ASCII letter followed by
/// ASCII letters and digits.
pub fn validate_phoneme(token: &str) -> Result<(), PhonemeError> {
    let mut chars = token.chars();
    let first = chars.next().ok_or(PhonemeError::Empty)?;
    if !first.is_ascii_alphabetic() {
        return Err(PhonemeError::MissingSymbol(token.to_string()));
    }
    if let Some(found) = chars.find(|c| !c.is_ascii_alphanumeric()) {
        return Err(PhonemeError::InvalidCharacter {
            token: token.to_string(),
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_phoneme_detection() {
        assert!(is_vowel_phoneme("AH0"));
        assert!(is_vowel_phoneme("OW1"));
        assert!(is_vowel_phoneme("EH2"));
        assert!(!is_vowel_phoneme("HH"));
        assert!(!is_vowel_phoneme("NG"));
        assert!(!is_vowel_phoneme(""));
    }

    #[test]
    fn count_vowels_in_sequence() {
        let hello = ["HH", "AH0", "L", "OW1"];
        assert_eq!(count_vowel_phonemes(&hello), 2);
        let owned: Pronunciation = vec!["K".into(), "AE1".into(), "T".into()];
        assert_eq!(count_vowel_phonemes(&owned), 1);
        assert_eq!(count_vowel_phonemes::<&str>(&[]), 0);
    }

    #[test]
    fn validate_accepts_arpabet() {
        assert!(validate_phoneme("HH").is_ok());
        assert!(validate_phoneme("AH0").is_ok());
        assert!(validate_phoneme("ZH").is_ok());
    }

    #[test]
    fn validate_rejects_garbage() {
        assert_eq!(validate_phoneme(""), Err(PhonemeError::Empty));
        assert_eq!(
            validate_phoneme("1AH"),
            Err(PhonemeError::MissingSymbol("1AH".to_string()))
        );
        assert_eq!(
            validate_phoneme("A-H"),
            Err(PhonemeError::InvalidCharacter {
                token: "A-H".to_string(),
                found: '-'
            })
        );
    }
}
