// syllabi-corpus: Extract a deduplicated syllable list from text.
//
// Tokenizes the input text into words, syllabifies each word, keeps the
// syllables within the length bounds and writes each distinct syllable once,
// in the order it was first seen.
//
// Usage:
//   syllabi-corpus [-d DICT_PATH] [OPTIONS] [-i FILE...]
//
// Examples:
//   syllabi-corpus -i book.txt --min-len 2 --max-len 4 -o syllables.txt
//   cat *.txt | syllabi-corpus --counts -f json

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use syllabi_cli::corpus::{LengthFilter, SyllableCorpus};
use syllabi_cli::output::{OutputFormat, write_corpus};
use syllabi_cli::{CliError, CliResult, CommonArgs};

#[derive(Debug, Parser)]
#[command(
    name = "syllabi-corpus",
    version,
    about = "Extract distinct syllables from English text"
)]
struct Cli {
    /// Input text files (default: stdin)
    #[arg(short, long, value_name = "FILE", num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Include how often each syllable occurred
    #[arg(long)]
    counts: bool,

    /// Shortest syllable to keep [default: 1]
    #[arg(long, value_name = "N")]
    min_len: Option<usize>,

    /// Longest syllable to keep [default: unbounded]
    #[arg(long, value_name = "N")]
    max_len: Option<usize>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let config = cli.common.load_config()?;
    let filter = LengthFilter::new(
        cli.min_len.unwrap_or(config.filter.min_len),
        cli.max_len.or(config.filter.max_len),
    )?;
    let syllabifier = cli.common.build_syllabifier(&config)?;

    let mut corpus = SyllableCorpus::new();
    if cli.input.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("error reading stdin")?;
            corpus.add_text(&syllabifier, &line, &filter);
        }
    } else {
        for path in &cli.input {
            let text = fs::read_to_string(path).map_err(|e| CliError::input(path, e))?;
            let added = corpus.add_text(&syllabifier, &text, &filter);
            info!("{}: {added} syllables kept", path.display());
        }
    }
    info!("{} distinct syllables", corpus.len());

    let entries = corpus.into_entries();
    match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_corpus(io::BufWriter::new(file), &entries, cli.format, cli.counts)
        }
        None => write_corpus(
            io::BufWriter::new(io::stdout().lock()),
            &entries,
            cli.format,
            cli.counts,
        ),
    }
}
