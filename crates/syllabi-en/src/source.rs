// Pronunciation sources consumed by the syllabifier

use syllabi_core::phoneme::Pronunciation;

/// Trait for pronunciation lookups.
///
/// Abstracts over the concrete dictionary so the syllabifier can be driven
/// by the CMU dictionary, an in-memory test table, or nothing at all.
/// Implementations are read-only; sharing one across threads only needs
/// `Sync`.
pub trait PronunciationSource {
    /// Return every pronunciation recorded for `word`, preferred first.
    ///
    /// `word` is lowercase ASCII. `None` means the word is unknown; it is not
    /// an error.
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]>;

    /// The preferred pronunciation of `word`, if any.
    fn first_pronunciation(&self, word: &str) -> Option<&Pronunciation> {
        self.pronunciations(word).and_then(|p| p.first())
    }
}

impl<T: PronunciationSource + ?Sized> PronunciationSource for &T {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).pronunciations(word)
    }
}

impl<T: PronunciationSource + ?Sized> PronunciationSource for Box<T> {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).pronunciations(word)
    }
}

/// A source that knows no words. Every word takes the orthographic fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPronunciations;

impl PronunciationSource for NoPronunciations {
    fn pronunciations(&self, _word: &str) -> Option<&[Pronunciation]> {
        None
    }
}

impl PronunciationSource for std::collections::HashMap<String, Vec<Pronunciation>> {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.get(word).map(Vec::as_slice)
    }
}
