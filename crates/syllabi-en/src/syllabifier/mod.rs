// Syllabifier -- English orthographic syllabification
//
// The syllabifier works by:
// 1. Normalizing the word to lowercase ASCII letters
// 2. Looking up its first pronunciation and segmenting it by stressed vowels
// 3. Checking that the spelling has enough vowel groups to carry that segmentation
// 4. Resolving each consonant cluster between vowel groups to one split point
//
// Words without a pronunciation, or whose spelling cannot carry it, take the
// orthographic fallback, which runs step 4 on the spelling alone.

mod options;

pub use options::{ExcessVowelPolicy, ParsePolicyError, SyllabifierOptions};

use log::{debug, trace};
use syllabi_core::character::{is_normalized, normalize_word};
use syllabi_core::syllable::VowelGroup;

use crate::orthography::{build_syllables, scan_vowel_groups, split_points};
use crate::phonetic::{segment, vowel_count};
use crate::source::PronunciationSource;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which path produced a syllabification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Route {
    /// Nothing was left after normalization.
    Empty,
    /// A single letter.
    Trivial,
    /// The dictionary pronunciation has at most one syllable group.
    Monosyllabic,
    /// Split points came from aligning the pronunciation with the spelling.
    Dictionary,
    /// The word is not in the dictionary.
    FallbackUnknown,
    /// The word is in the dictionary but its spelling could not carry the
    /// pronunciation.
    FallbackMismatch,
}

impl Route {
    /// True for both fallback routes.
    pub fn is_fallback(self) -> bool {
        matches!(self, Route::FallbackUnknown | Route::FallbackMismatch)
    }
}

/// Syllables of one word together with the route that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Syllabification {
    pub syllables: Vec<String>,
    pub route: Route,
}

/// Outcome of comparing orthographic vowel groups with phonetic vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// One vowel group per vowel phoneme.
    Aligned,
    /// The spelling has `extra` more vowel groups than the pronunciation has
    /// vowels (silent letters, spelling digraphs split by consonants).
    Excess { extra: usize },
    /// Fewer vowel groups than vowel phonemes: some group would have to be
    /// split internally, which the mapper cannot do.
    Unreliable,
}

/// Compare the orthographic vowel-group count with the phonetic vowel count.
pub fn check_alignment(orthographic_groups: usize, phonetic_vowels: usize) -> Alignment {
    if orthographic_groups < phonetic_vowels {
        Alignment::Unreliable
    } else if orthographic_groups > phonetic_vowels {
        Alignment::Excess {
            extra: orthographic_groups - phonetic_vowels,
        }
    } else {
        Alignment::Aligned
    }
}

// ---------------------------------------------------------------------------
// Syllabifier
// ---------------------------------------------------------------------------

/// Dictionary-guided syllabifier with an orthographic fallback.
///
/// The syllabifier is immutable after construction apart from its options,
/// and `Send + Sync` whenever its source is.
#[derive(Debug, Clone)]
pub struct Syllabifier<S: PronunciationSource> {
    source: S,
    options: SyllabifierOptions,
}

impl<S: PronunciationSource> Syllabifier<S> {
    /// Create a syllabifier with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, SyllabifierOptions::default())
    }

    pub fn with_options(source: S, options: SyllabifierOptions) -> Self {
        Self { source, options }
    }

    /// Update syllabifier options.
    pub fn set_options(&mut self, options: SyllabifierOptions) {
        self.options = options;
    }

    /// Return a reference to the current options.
    pub fn options(&self) -> &SyllabifierOptions {
        &self.options
    }

    /// The pronunciation source consulted for lookups.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Split `word` into orthographic syllables.
    ///
    /// The word is normalized first (ASCII-lowercased, non-letters dropped).
    /// The result is empty only when nothing survives normalization;
    /// otherwise every syllable is non-empty and their concatenation equals
    /// the normalized word.
    pub fn syllabify(&self, word: &str) -> Vec<String> {
        self.explain(word).syllables
    }

    /// Like [`syllabify`](Self::syllabify), but also report which path
    /// produced the result.
    pub fn explain(&self, word: &str) -> Syllabification {
        let word = normalize_word(word);
        let result = self.explain_normalized(word);
        trace!("{:?} via {:?}", result.syllables, result.route);
        result
    }

    fn explain_normalized(&self, word: String) -> Syllabification {
        match word.len() {
            0 => return done(Vec::new(), Route::Empty),
            1 => return done(vec![word], Route::Trivial),
            _ => {}
        }

        let Some(pronunciation) = self.source.first_pronunciation(&word) else {
            debug!("{word}: not in dictionary, using orthographic fallback");
            return done(fallback_split(&word), Route::FallbackUnknown);
        };

        let groups = segment(pronunciation);
        if groups.len() <= 1 {
            return done(vec![word], Route::Monosyllabic);
        }

        match map_to_orthographic(&word, &groups, self.options.excess_vowels) {
            Some(syllables) => done(syllables, Route::Dictionary),
            None => {
                debug!(
                    "{word}: spelling does not align with {}, using orthographic fallback",
                    pronunciation.join(" ")
                );
                done(fallback_split(&word), Route::FallbackMismatch)
            }
        }
    }
}

fn done(syllables: Vec<String>, route: Route) -> Syllabification {
    Syllabification { syllables, route }
}

/// Syllabify one word with default options.
pub fn syllabify_word<S: PronunciationSource>(source: &S, word: &str) -> Vec<String> {
    Syllabifier::new(source).syllabify(word)
}

// ---------------------------------------------------------------------------
// Dictionary-guided mapping
// ---------------------------------------------------------------------------

/// Map a phonetic segmentation onto the spelling of `word`.
///
/// Returns `None` when the spelling cannot carry the segmentation (fewer
/// vowel groups than vowel phonemes, or an excess under
/// [`ExcessVowelPolicy::Fallback`], or a `word` that is not normalized);
/// the caller then uses [`fallback_split`].
pub fn map_to_orthographic(
    word: &str,
    phonetic_groups: &[Vec<&str>],
    policy: ExcessVowelPolicy,
) -> Option<Vec<String>> {
    if !is_normalized(word) {
        return None;
    }
    let mut groups = scan_vowel_groups(word);
    let phonetic_vowels = vowel_count(phonetic_groups);

    match check_alignment(groups.len(), phonetic_vowels) {
        Alignment::Aligned => {}
        Alignment::Unreliable => return None,
        Alignment::Excess { extra } => match policy {
            ExcessVowelPolicy::Ignore => {}
            ExcessVowelPolicy::Fallback => return None,
            ExcessVowelPolicy::Merge => {
                trace!("{word}: {extra} extra vowel group(s), merging");
                merge_excess_groups(word, &mut groups, phonetic_vowels);
            }
        },
    }

    let points = split_points(word, &groups);
    Some(build_syllables(word, &points))
}

/// Reduce `groups` to `phonetic_vowels` entries (at least one).
///
/// Silent `e` letters are discounted first. A word-final one is dropped, so
/// "make" stays a single syllable. An inner one closing a vowel-consonant-e
/// pattern joins the preceding group, so its consonant stays behind with it
/// ("some|where", "love|ly"). Any remaining excess is absorbed into the last
/// syllable.
fn merge_excess_groups(word: &str, groups: &mut Vec<VowelGroup>, phonetic_vowels: usize) {
    let target = phonetic_vowels.max(1);
    if groups.len() > target && groups.last().is_some_and(|g| is_silent_final_e(word, g)) {
        groups.pop();
    }

    let mut i = 1;
    while groups.len() > target && i < groups.len() {
        if is_silent_inner_e(word, &groups[i - 1], &groups[i]) {
            groups[i - 1].end = groups[i].end;
            groups.remove(i);
        } else {
            i += 1;
        }
    }

    groups.truncate(target);
}

/// A lone `e` ending the word after a consonant.
fn is_silent_final_e(word: &str, group: &VowelGroup) -> bool {
    group.start > 0 && group.end == word.len() && group.text(word) == "e"
}

/// A lone `e` inside the word, one consonant after the preceding group.
fn is_silent_inner_e(word: &str, previous: &VowelGroup, group: &VowelGroup) -> bool {
    group.end < word.len() && group.start == previous.end + 1 && group.text(word) == "e"
}

// ---------------------------------------------------------------------------
// Orthographic fallback
// ---------------------------------------------------------------------------

/// Split `word` using its spelling alone.
///
/// Words with at most one vowel group are returned whole and an empty word
/// yields no syllables. Any string is accepted: only ASCII vowel letters
/// form groups and splits never fall inside a multi-byte character.
pub fn fallback_split(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }
    let groups = scan_vowel_groups(word);
    if groups.len() <= 1 {
        return vec![word.to_string()];
    }
    build_syllables(word, &split_points(word, &groups))
}
