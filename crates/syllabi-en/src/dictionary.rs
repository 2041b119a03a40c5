// CMU Pronouncing Dictionary loader
//
// Accepts both published layouts:
//   cmudict-0.7b   "HELLO  HH AH0 L OW1", alternates as "HELLO(1)", ";;;" comments
//   cmudict.dict   "hello hh ah0 l ow1", alternates as "hello(2)", "#" comments
//
// Headwords are lowercased and phonemes uppercased, so both layouts load
// into the same table.

use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use log::{debug, info};
use syllabi_core::phoneme::{PhonemeError, Pronunciation, validate_phoneme};

use crate::source::PronunciationSource;

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("failed to open dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the underlying stream failed.
    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),

    /// A headword was not followed by any phoneme.
    #[error("line {line}: entry {word:?} has no phonemes")]
    MissingPhonemes { line: usize, word: String },

    /// A phoneme field was malformed.
    #[error("line {line}: {source}")]
    InvalidPhoneme {
        line: usize,
        #[source]
        source: PhonemeError,
    },
}

/// In-memory pronunciation dictionary keyed by lowercase headword.
#[derive(Debug, Clone, Default)]
pub struct PronunciationDictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl PronunciationDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_reader(BufReader::new(file))?;
        info!("loaded {} headwords from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Parse dictionary text held in memory.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse dictionary text from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut dict = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let Some((word, pronunciation)) = parse_line(&line, line_no)? else {
                continue;
            };
            dict.insert(word, pronunciation);
        }
        Ok(dict)
    }

    /// Append a pronunciation for `word`. The first pronunciation inserted
    /// for a word stays the preferred one.
    pub fn insert(&mut self, word: impl Into<String>, pronunciation: Pronunciation) {
        let word = word.into().to_ascii_lowercase();
        self.entries.entry(word).or_default().push(pronunciation);
    }

    /// Number of distinct headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

impl PronunciationSource for PronunciationDictionary {
    fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries
            .get(word)
            .map(Vec::as_slice)
            .filter(|p| !p.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Parse one dictionary line. Returns `Ok(None)` for blank and comment lines.
fn parse_line(
    line: &str,
    line_no: usize,
) -> Result<Option<(String, Pronunciation)>, DictionaryError> {
    if line.starts_with(";;;") {
        return Ok(None);
    }
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut fields = content.split_whitespace();
    let Some(headword) = fields.next() else {
        return Ok(None);
    };
    let word = strip_variant(headword).to_ascii_lowercase();

    let pronunciation = fields
        .map(|field| {
            validate_phoneme(field)
                .map(|()| field.to_ascii_uppercase())
                .map_err(|source| DictionaryError::InvalidPhoneme {
                    line: line_no,
                    source,
                })
        })
        .collect::<Result<Pronunciation, _>>()?;

    if pronunciation.is_empty() {
        return Err(DictionaryError::MissingPhonemes {
            line: line_no,
            word,
        });
    }

    debug!("line {line_no}: {word} -> {}", pronunciation.join(" "));
    Ok(Some((word, pronunciation)))
}

/// Strip an alternate-pronunciation marker such as `(1)` from a headword.
fn strip_variant(headword: &str) -> &str {
    if let Some(open) = headword.rfind('(') {
        let marker = &headword[open + 1..];
        if open > 0
            && marker.ends_with(')')
            && marker.len() > 1
            && marker[..marker.len() - 1].bytes().all(|b| b.is_ascii_digit())
        {
            return &headword[..open];
        }
    }
    headword
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "\
;;; # CMUdict  --  Major Version: 0.07
;;;
HELLO  HH AH0 L OW1
HELLO(1)  HH EH0 L OW1
CAT  K AE1 T
";

    const MODERN: &str = "\
hello hh ah0 l ow1
hello(2) hh eh0 l ow1
d'artagnan d ah0 r t ae1 n y ah0 n # place, french
";

    #[test]
    fn parse_classic_layout() {
        let dict = PronunciationDictionary::parse(CLASSIC).unwrap();
        assert_eq!(dict.len(), 2);
        let hello = dict.pronunciations("hello").unwrap();
        assert_eq!(hello.len(), 2);
        assert_eq!(hello[0], vec!["HH", "AH0", "L", "OW1"]);
        assert_eq!(hello[1], vec!["HH", "EH0", "L", "OW1"]);
    }

    #[test]
    fn parse_modern_layout() {
        let dict = PronunciationDictionary::parse(MODERN).unwrap();
        assert_eq!(
            dict.first_pronunciation("hello"),
            Some(&vec![
                "HH".to_string(),
                "AH0".to_string(),
                "L".to_string(),
                "OW1".to_string()
            ])
        );
        // Trailing comment is dropped
        assert_eq!(dict.pronunciations("d'artagnan").unwrap()[0].len(), 9);
    }

    #[test]
    fn lookup_is_by_lowercase_word() {
        let dict = PronunciationDictionary::parse(CLASSIC).unwrap();
        assert!(dict.contains("cat"));
        assert!(!dict.contains("CAT"));
        assert!(dict.pronunciations("dog").is_none());
    }

    #[test]
    fn missing_phonemes_is_an_error() {
        let err = PronunciationDictionary::parse("CAT  K AE1 T\nDOG\n").unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MissingPhonemes { line: 2, ref word } if word == "dog"
        ));
    }

    #[test]
    fn invalid_phoneme_is_an_error() {
        let err = PronunciationDictionary::parse("CAT  K AE1 T-\n").unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::InvalidPhoneme {
                line: 1,
                source: PhonemeError::InvalidCharacter { ref token, found: '-' },
            } if token == "T-"
        ));
        assert!(err.to_string().starts_with("line 1:"));
    }

    #[test]
    fn load_missing_file() {
        let err = PronunciationDictionary::load("/nonexistent/cmudict.dict").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/cmudict.dict"));
    }

    #[test]
    fn insert_keeps_first_as_preferred() {
        let mut dict = PronunciationDictionary::new();
        assert!(dict.is_empty());
        dict.insert("Read", vec!["R".into(), "IY1".into(), "D".into()]);
        dict.insert("read", vec!["R".into(), "EH1".into(), "D".into()]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.first_pronunciation("read").unwrap()[1], "IY1");
    }

    #[test]
    fn strip_variant_markers() {
        assert_eq!(strip_variant("HELLO(1)"), "HELLO");
        assert_eq!(strip_variant("hello(12)"), "hello");
        assert_eq!(strip_variant("hello"), "hello");
        assert_eq!(strip_variant("(1)"), "(1)");
        assert_eq!(strip_variant("smile(s)"), "smile(s)");
        assert_eq!(strip_variant("odd()"), "odd()");
    }
}
