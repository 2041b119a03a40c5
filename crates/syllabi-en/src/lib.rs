//! English orthographic syllabification.
//!
//! Words are split into spelling-level syllables by aligning a phonetic
//! segmentation (from a pronunciation dictionary) against the vowel letters
//! of the word. Words without a usable pronunciation go through a purely
//! orthographic fallback built from the same consonant-cluster rule.
//!
//! # Architecture
//!
//! - [`english`] -- English phonotactics (legal syllable onsets)
//! - [`phonetic`] -- Stress-driven segmentation of phoneme sequences
//! - [`orthography`] -- Vowel-group scanning, cluster resolution, syllable building
//! - [`source`] -- The [`PronunciationSource`] trait and trivial sources
//! - [`dictionary`] -- CMU-format pronunciation dictionary (feature `dictionary`)
//! - [`syllabifier`] -- The [`Syllabifier`] entry point

pub mod english;
pub mod orthography;
pub mod phonetic;
pub mod source;
pub mod syllabifier;

#[cfg(feature = "dictionary")]
pub mod dictionary;

#[cfg(feature = "dictionary")]
pub use dictionary::{DictionaryError, PronunciationDictionary};
pub use source::{NoPronunciations, PronunciationSource};
pub use syllabifier::{
    ExcessVowelPolicy, Route, Syllabification, Syllabifier, SyllabifierOptions, syllabify_word,
};
