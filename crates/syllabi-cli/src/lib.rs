// syllabi-cli: shared utilities for CLI tools.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Args;
use log::info;
use syllabi_en::{
    ExcessVowelPolicy, NoPronunciations, PronunciationDictionary, PronunciationSource, Syllabifier,
};

pub use config::CliConfig;
pub use error::{CliError, CliResult, ConfigError};

/// Dictionary file names looked for inside a search directory.
const DICT_FILES: [&str; 2] = ["cmudict.dict", "cmudict-0.7b"];

/// Environment variable naming a dictionary file or directory.
pub const DICT_PATH_ENV: &str = "SYLLABI_DICT_PATH";

/// A syllabifier over whichever source the command line selected.
pub type DynSyllabifier = Syllabifier<Box<dyn PronunciationSource + Send + Sync>>;

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

/// Search for a dictionary file and load it.
///
/// An explicit `dict_path` is the only place searched. Otherwise the search
/// order is:
/// 1. `SYLLABI_DICT_PATH` environment variable
/// 2. `~/.syllabi`
/// 3. `/usr/share/syllabi`
/// 4. Current working directory
///
/// Each entry may be a dictionary file or a directory containing
/// `cmudict.dict` or `cmudict-0.7b`.
pub fn load_dictionary(dict_path: Option<&Path>) -> Result<PronunciationDictionary, CliError> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if let Some(file) = resolve_dictionary_file(path) {
            return Ok(PronunciationDictionary::load(&file)?);
        }
    }

    Err(CliError::DictionaryNotFound(search_paths))
}

/// Build the list of locations to search for a dictionary.
fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    if let Some(p) = dict_path {
        return vec![p.to_path_buf()];
    }

    let mut paths = Vec::new();

    if let Some(env_path) = std::env::var_os(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".syllabi"));
    }

    paths.push(PathBuf::from("/usr/share/syllabi"));

    // Fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn resolve_dictionary_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    DICT_FILES
        .iter()
        .map(|name| path.join(name))
        .find(|candidate| candidate.is_file())
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Shared command-line arguments
// ---------------------------------------------------------------------------

/// Arguments common to every syllabi tool.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Dictionary file, or a directory containing cmudict.dict
    #[arg(short, long, value_name = "PATH")]
    pub dict_path: Option<PathBuf>,

    /// Skip the dictionary and use spelling rules only
    #[arg(long, conflicts_with = "dict_path")]
    pub no_dict: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "SYLLABI_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to handle spellings with more vowel groups than vowel sounds
    /// (merge, fallback or ignore)
    #[arg(long, value_name = "POLICY")]
    pub excess_vowels: Option<ExcessVowelPolicy>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Read the configuration file, or use defaults when none was given.
    pub fn load_config(&self) -> Result<CliConfig, CliError> {
        match &self.config {
            Some(path) => Ok(CliConfig::load(path)?),
            None => Ok(CliConfig::default()),
        }
    }

    /// Build a syllabifier from the configuration, with flags taking
    /// precedence.
    pub fn build_syllabifier(&self, config: &CliConfig) -> Result<DynSyllabifier, CliError> {
        let mut options = config.syllabifier;
        if let Some(policy) = self.excess_vowels {
            options.excess_vowels = policy;
        }

        let source: Box<dyn PronunciationSource + Send + Sync> = if self.no_dict {
            info!("dictionary disabled, using spelling rules only");
            Box::new(NoPronunciations)
        } else {
            let dict_path = self
                .dict_path
                .as_deref()
                .or(config.dictionary.path.as_deref());
            Box::new(load_dictionary(dict_path)?)
        };

        Ok(Syllabifier::with_options(source, options))
    }
}
