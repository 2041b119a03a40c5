// Onset validation: is a consonant cluster a legal syllable onset?

use super::constants::LEGAL_ONSETS;

/// Longest onset cluster the validator knows about, in letters.
pub const MAX_ONSET_LEN: usize = 3;

/// Check whether `cluster` may begin an English syllable.
///
/// Comparison ignores ASCII case. Clusters longer than [`MAX_ONSET_LEN`]
/// are never legal.
pub fn is_valid_onset(cluster: &str) -> bool {
    if cluster.is_empty() || cluster.len() > MAX_ONSET_LEN {
        return false;
    }
    LEGAL_ONSETS
        .iter()
        .any(|onset| onset.eq_ignore_ascii_case(cluster))
}
