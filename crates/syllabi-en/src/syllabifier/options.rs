// Syllabifier configuration

use std::fmt;
use std::str::FromStr;

/// What to do when the spelling has more vowel groups than the
/// pronunciation has vowels ("make" has `a` and `e`, but one vowel sound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ExcessVowelPolicy {
    /// Discount a silent final `e`, then merge trailing vowel groups into
    /// the last syllable until the counts agree.
    #[default]
    Merge,
    /// Use the orthographic fallback instead.
    Fallback,
    /// Split between every pair of vowel groups regardless of the
    /// pronunciation.
    Ignore,
}

impl ExcessVowelPolicy {
    pub const ALL: [ExcessVowelPolicy; 3] = [Self::Merge, Self::Fallback, Self::Ignore];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Fallback => "fallback",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for ExcessVowelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown excess-vowel policy {0:?} (expected merge, fallback or ignore)")]
pub struct ParsePolicyError(pub String);

impl FromStr for ExcessVowelPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}

/// Configuration options for the syllabifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SyllabifierOptions {
    /// Handling of spellings with more vowel groups than vowel phonemes.
    pub excess_vowels: ExcessVowelPolicy,
}
