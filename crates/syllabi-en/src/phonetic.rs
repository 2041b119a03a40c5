// Phonetic segmentation: split a phoneme sequence into syllable groups
//
// Each stress-marked vowel closes the group it lands in, so consonants
// preceding a vowel belong to that vowel's group. Consonants after the last
// vowel form one trailing consonant-only group.

use syllabi_core::phoneme::{count_vowel_phonemes, is_vowel_phoneme};

/// Split `phonemes` into per-syllable groups.
///
/// Every group except possibly the last ends in exactly one vowel phoneme.
/// A word-final consonant cluster is kept as its own trailing group rather
/// than being merged into the previous one, so the number of groups is the
/// vowel count plus one when such a cluster exists.
///
/// An empty input yields no groups; input without vowels yields a single
/// consonant-only group. Callers treat `groups.len() <= 1` as monosyllabic.
pub fn segment<S: AsRef<str>>(phonemes: &[S]) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for phoneme in phonemes {
        let phoneme = phoneme.as_ref();
        current.push(phoneme);
        if is_vowel_phoneme(phoneme) {
            groups.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// Number of vowel phonemes across a segmentation.
pub fn vowel_count(groups: &[Vec<&str>]) -> usize {
    groups.iter().map(|g| count_vowel_phonemes(g)).sum()
}
