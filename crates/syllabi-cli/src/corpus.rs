//! Syllable corpus extraction
//!
//! Text is tokenized into words, each word is syllabified, and the
//! syllables that pass a length filter are collected once each in the order
//! they were first seen.

use std::collections::HashMap;

use syllabi_core::character::normalize_word;
use syllabi_en::{PronunciationSource, Syllabifier};

use crate::error::CliError;

/// Split `text` into normalized words.
///
/// Any character that is not an ASCII letter separates words, so "don't"
/// yields "don" and "t".
pub fn tokenize_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(normalize_word)
}

// ---------------------------------------------------------------------------
// Length filter
// ---------------------------------------------------------------------------

/// Inclusive bounds on syllable length, in letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    min_len: usize,
    max_len: usize,
}

impl LengthFilter {
    /// Create a filter, rejecting bounds that no syllable could satisfy.
    pub fn new(min_len: usize, max_len: Option<usize>) -> Result<Self, CliError> {
        let max_len = max_len.unwrap_or(usize::MAX);
        if min_len == 0 {
            return Err(CliError::InvalidFilter(
                "min_len must be at least 1".to_string(),
            ));
        }
        if min_len > max_len {
            return Err(CliError::InvalidFilter(format!(
                "min_len {min_len} is greater than max_len {max_len}"
            )));
        }
        Ok(Self { min_len, max_len })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn contains(&self, syllable: &str) -> bool {
        (self.min_len..=self.max_len).contains(&syllable.len())
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: usize::MAX,
        }
    }
}

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

/// One distinct syllable and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SyllableEntry {
    pub syllable: String,
    pub count: usize,
}

/// Deduplicating syllable collector preserving first-seen order.
#[derive(Debug, Default)]
pub struct SyllableCorpus {
    entries: Vec<SyllableEntry>,
    index: HashMap<String, usize>,
}

impl SyllableCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Syllabify `word` and record every syllable that passes `filter`.
    ///
    /// Returns the number of syllables recorded, repeats included.
    pub fn add_word<S: PronunciationSource>(
        &mut self,
        syllabifier: &Syllabifier<S>,
        word: &str,
        filter: &LengthFilter,
    ) -> usize {
        let mut added = 0;
        for syllable in syllabifier.syllabify(word) {
            if filter.contains(&syllable) {
                self.add_syllable(syllable);
                added += 1;
            }
        }
        added
    }

    /// Record one occurrence of `syllable`.
    pub fn add_syllable(&mut self, syllable: String) {
        match self.index.get(&syllable) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(syllable.clone(), self.entries.len());
                self.entries.push(SyllableEntry { syllable, count: 1 });
            }
        }
    }

    /// Tokenize `text` and add every word.
    pub fn add_text<S: PronunciationSource>(
        &mut self,
        syllabifier: &Syllabifier<S>,
        text: &str,
        filter: &LengthFilter,
    ) -> usize {
        tokenize_words(text)
            .map(|word| self.add_word(syllabifier, &word, filter))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyllableEntry> {
        self.entries.iter()
    }

    /// Number of distinct syllables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<SyllableEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabi_en::NoPronunciations;

    fn syllables(corpus: &SyllableCorpus) -> Vec<&str> {
        corpus.iter().map(|e| e.syllable.as_str()).collect()
    }

    #[test]
    fn tokenize_splits_on_non_letters() {
        let words: Vec<String> = tokenize_words("Hello, World! don't 42 stop").collect();
        assert_eq!(words, vec!["hello", "world", "don", "t", "stop"]);
    }

    #[test]
    fn tokenize_empty_text() {
        assert_eq!(tokenize_words("  ,.; 123 ").count(), 0);
    }

    #[test]
    fn tokenize_drops_non_ascii_letters() {
        let words: Vec<String> = tokenize_words("café naïve").collect();
        assert_eq!(words, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn filter_bounds_are_inclusive() {
        let filter = LengthFilter::new(2, Some(3)).unwrap();
        assert!(!filter.contains("a"));
        assert!(filter.contains("ab"));
        assert!(filter.contains("abc"));
        assert!(!filter.contains("abcd"));
    }

    #[test]
    fn filter_without_upper_bound() {
        let filter = LengthFilter::new(1, None).unwrap();
        assert_eq!(filter, LengthFilter::default());
        assert!(filter.contains("supercalifragilistic"));
    }

    #[test]
    fn filter_validation() {
        assert!(matches!(
            LengthFilter::new(0, Some(3)),
            Err(CliError::InvalidFilter(_))
        ));
        assert!(matches!(
            LengthFilter::new(4, Some(3)),
            Err(CliError::InvalidFilter(_))
        ));
        assert!(LengthFilter::new(3, Some(3)).is_ok());
    }

    #[test]
    fn corpus_dedupes_in_first_seen_order() {
        let syllabifier = Syllabifier::new(NoPronunciations);
        let filter = LengthFilter::default();
        let mut corpus = SyllableCorpus::new();
        // hel-lo, yel-low, hel-met
        corpus.add_word(&syllabifier, "hello", &filter);
        corpus.add_word(&syllabifier, "yellow", &filter);
        corpus.add_word(&syllabifier, "helmet", &filter);
        assert_eq!(syllables(&corpus), vec!["hel", "lo", "yel", "low", "met"]);
        assert_eq!(corpus.iter().next().unwrap().count, 2);
    }

    #[test]
    fn corpus_applies_filter() {
        let syllabifier = Syllabifier::new(NoPronunciations);
        let filter = LengthFilter::new(3, None).unwrap();
        let mut corpus = SyllableCorpus::new();
        assert_eq!(corpus.add_word(&syllabifier, "hello", &filter), 1);
        assert_eq!(syllables(&corpus), vec!["hel"]);
    }

    #[test]
    fn corpus_from_text() {
        let syllabifier = Syllabifier::new(NoPronunciations);
        let mut corpus = SyllableCorpus::new();
        let added = corpus.add_text(&syllabifier, "Hello hello. Cat!", &LengthFilter::default());
        assert_eq!(added, 5);
        assert_eq!(corpus.len(), 3);
        let entries = corpus.into_entries();
        assert_eq!(
            entries[0],
            SyllableEntry {
                syllable: "hel".to_string(),
                count: 2
            }
        );
        assert_eq!(entries[2].syllable, "cat");
    }

    #[test]
    fn empty_corpus() {
        let corpus = SyllableCorpus::new();
        assert!(corpus.is_empty());
        assert!(corpus.into_entries().is_empty());
    }
}
