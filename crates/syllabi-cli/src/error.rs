//! Error handling for the CLI tools

use std::io;
use std::path::{Path, PathBuf};

use syllabi_en::DictionaryError;

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// CLI-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No dictionary file was found along the search path.
    #[error(
        "could not find a pronunciation dictionary in any of the search paths:\n{}",
        format_paths(.0)
    )]
    DictionaryNotFound(Vec<PathBuf>),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Length bounds that no syllable could satisfy.
    #[error("invalid length filter: {0}")]
    InvalidFilter(String),

    /// An input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

impl CliError {
    pub fn input(path: &Path, source: io::Error) -> Self {
        CliError::Input {
            path: path.to_path_buf(),
            source,
        }
    }
}
