// Orthographic syllable mechanics
//
// The pieces shared by the dictionary-guided and the fallback path:
// 1. Scan the spelled word for maximal vowel-letter runs
// 2. Resolve each consonant cluster between neighbouring runs to one split point
// 3. Cut the word at the collected split points

use syllabi_core::character::is_vowel_letter;
use syllabi_core::syllable::VowelGroup;

use crate::english::{MAX_ONSET_LEN, is_valid_onset};

// ---------------------------------------------------------------------------
// Vowel-group scanning
// ---------------------------------------------------------------------------

/// Return the maximal runs of vowel letters in `word`, in order.
///
/// `word` is expected to be normalized (`[a-z]*`); offsets are byte offsets.
pub fn scan_vowel_groups(word: &str) -> Vec<VowelGroup> {
    let mut groups = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, c) in word.char_indices() {
        match (is_vowel_letter(c), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                groups.push(VowelGroup::new(start, i));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        groups.push(VowelGroup::new(start, word.len()));
    }

    groups
}

// ---------------------------------------------------------------------------
// Cluster split resolution
// ---------------------------------------------------------------------------

/// Choose the split point between two syllables separated by `consonants`.
///
/// `boundary_if_none` is the offset just after the first vowel group; the
/// second vowel group starts at `boundary_if_none + consonants.len()`.
///
/// - No consonants: split between the vowels.
/// - One consonant: it becomes the onset of the next syllable.
/// - Longer clusters: the longest trailing sub-cluster (3, then 2, then 1
///   letters) that is a legal onset moves to the next syllable. Without a
///   legal onset, only the last consonant moves and the rest stay as coda.
///
/// Clusters holding non-ASCII letters never match an onset, and the split
/// always lands on a character boundary.
pub fn resolve_split(consonants: &str, boundary_if_none: usize) -> usize {
    let Some((last, _)) = consonants.char_indices().next_back() else {
        return boundary_if_none;
    };
    if last == 0 {
        return boundary_if_none;
    }

    let n = consonants.len();
    for onset_len in (1..=MAX_ONSET_LEN.min(n)).rev() {
        let Some(onset) = consonants.get(n - onset_len..) else {
            continue;
        };
        if is_valid_onset(onset) {
            return boundary_if_none + n - onset_len;
        }
    }

    boundary_if_none + last
}

/// Resolve the split point between every pair of neighbouring vowel groups.
///
/// Only points strictly inside the word are returned.
pub fn split_points(word: &str, groups: &[VowelGroup]) -> Vec<usize> {
    groups
        .windows(2)
        .map(|pair| {
            let vowel_end = pair[0].end;
            resolve_split(&word[vowel_end..pair[1].start], vowel_end)
        })
        .filter(|&p| p > 0 && p < word.len())
        .collect()
}

// ---------------------------------------------------------------------------
// Syllable building
// ---------------------------------------------------------------------------

/// Cut `word` at the given split points.
///
/// Points are sorted and deduplicated first; points outside `1..word.len()`
/// or inside a multi-byte character are ignored. No syllable is ever empty, and concatenating the result
/// reproduces `word`. An empty `word` yields no syllables.
pub fn build_syllables(word: &str, split_points: &[usize]) -> Vec<String> {
    let mut points: Vec<usize> = split_points
        .iter()
        .copied()
        .filter(|&p| p > 0 && p < word.len() && word.is_char_boundary(p))
        .collect();
    points.sort_unstable();
    points.dedup();

    let mut syllables = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for point in points {
        syllables.push(word[start..point].to_string());
        start = point;
    }
    syllables.push(word[start..].to_string());

    syllables.retain(|s| !s.is_empty());
    syllables
}
