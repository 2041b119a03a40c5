//! Shared value types for syllabi.
//!
//! - [`character`] -- Letter classification and word normalization
//! - [`phoneme`] -- Stress-marked phoneme tokens and pronunciations
//! - [`syllable`] -- Orthographic vowel groups

pub mod character;
pub mod phoneme;
pub mod syllable;
