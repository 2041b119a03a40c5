// syllabify: Split English words into orthographic syllables.
//
// Reads words from the command line, or whitespace-separated from stdin, and
// prints each word with its syllables joined by a separator.
//
// Usage:
//   syllabify [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Examples:
//   syllabify hello water        # hel-lo, wa-ter
//   syllabify --route rhythm     # rhythm  fallback_mismatch
//   syllabify -f json < words.txt

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use syllabi_cli::output::{OutputFormat, WordWriter};
use syllabi_cli::{CliResult, CommonArgs};

#[derive(Debug, Parser)]
#[command(
    name = "syllabify",
    version,
    about = "Split English words into orthographic syllables"
)]
struct Cli {
    /// Words to syllabify (default: read whitespace-separated words from stdin)
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Separator inserted between syllables [default: -]
    #[arg(short, long, value_name = "SEP")]
    separator: Option<String>,

    /// Show which path produced each split
    #[arg(short, long)]
    route: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let config = cli.common.load_config()?;
    let syllabifier = cli.common.build_syllabifier(&config)?;
    let separator = cli
        .separator
        .as_deref()
        .unwrap_or(&config.output.separator);

    let stdout = io::stdout();
    let mut out = WordWriter::new(
        io::BufWriter::new(stdout.lock()),
        cli.format,
        separator,
        cli.route,
    );

    if cli.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("error reading stdin")?;
            for word in line.split_whitespace() {
                out.write(word, &syllabifier.explain(word))?;
            }
        }
    } else {
        for word in &cli.words {
            out.write(word, &syllabifier.explain(word))?;
        }
    }

    out.finish()
}
