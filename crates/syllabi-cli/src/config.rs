//! Configuration file support
//!
//! Every section and field is optional; command-line flags override the
//! values read here.
//!
//! ```toml
//! [dictionary]
//! path = "/usr/share/syllabi/cmudict.dict"
//!
//! [syllabifier]
//! excess_vowels = "merge"
//!
//! [filter]
//! min_len = 2
//! max_len = 6
//!
//! [output]
//! separator = "-"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use syllabi_en::SyllabifierOptions;

use crate::error::ConfigError;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub dictionary: DictionaryConfig,
    pub syllabifier: SyllabifierOptions,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Where to find the pronunciation dictionary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    /// Dictionary file, or a directory containing one.
    pub path: Option<PathBuf>,
}

/// Syllable length bounds, inclusive.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub min_len: usize,
    /// Unbounded when absent.
    pub max_len: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Separator inserted between syllables by `syllabify`.
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
        }
    }
}

impl CliConfig {
    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
