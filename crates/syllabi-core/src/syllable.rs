// Orthographic syllable value types

use std::ops::Range;

// ---------------------------------------------------------------------------
// VowelGroup
// ---------------------------------------------------------------------------

/// A maximal run of vowel letters inside a word.
///
/// `start..end` is a half-open byte range. Words are normalized to ASCII
/// before scanning, so byte and character offsets coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelGroup {
    /// Offset of the first vowel letter.
    pub start: usize,
    /// Offset one past the last vowel letter.
    pub end: usize,
}

impl VowelGroup {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "vowel group must be non-empty");
        Self { start, end }
    }

    /// Number of letters in the group.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for a well-formed group; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The letters of this group within `word`.
    pub fn text<'a>(&self, word: &'a str) -> &'a str {
        &word[self.range()]
    }
}
