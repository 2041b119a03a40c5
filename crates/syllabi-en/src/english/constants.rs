// English phonotactic constants shared by the syllabification paths.

/// Consonant clusters that may begin an English syllable inside a word.
///
/// Spelling-level clusters, so digraphs such as `ch`, `th` and `ph` appear
/// alongside the true clusters. Single consonants are deliberately absent:
/// a lone consonant onset is the resolver's default, not a lookup result.
/// Clusters that only begin whole words (`gn`, `kn`, `ps`, `wr`) are left
/// out, as are `sc`, `sk` and `dw`, which split across syllables inside
/// words ("dis|cuss", "bas|ket", "mid|way").
pub(crate) const LEGAL_ONSETS: &[&str] = &[
    // s-clusters
    "sl", "sm", "sn", "sp", "st", "sw", "scr", "shr", "spl", "spr", "squ", "str",
    // stop/fricative + liquid
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "tr",
    // + w
    "tw",
    // digraphs
    "ch", "gh", "ph", "sh", "th", "wh",
    // digraph clusters
    "thr",
];
