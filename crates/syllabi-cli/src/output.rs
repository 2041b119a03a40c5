//! Output formatting

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use syllabi_en::{Route, Syllabification};

use crate::corpus::SyllableEntry;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one entry per line
    #[default]
    Text,
    /// JSON array
    Json,
}

/// One syllabified word, as written by `syllabify --format json`.
#[derive(Debug, Serialize)]
pub struct WordRecord<'a> {
    pub word: &'a str,
    pub syllables: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

/// Writes syllabified words one at a time.
pub struct WordWriter<'a, W: Write> {
    writer: W,
    format: OutputFormat,
    separator: &'a str,
    show_route: bool,
    first: bool,
}

impl<'a, W: Write> WordWriter<'a, W> {
    pub fn new(writer: W, format: OutputFormat, separator: &'a str, show_route: bool) -> Self {
        Self {
            writer,
            format,
            separator,
            show_route,
            first: true,
        }
    }

    pub fn write(&mut self, word: &str, result: &Syllabification) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                write!(self.writer, "{}", result.syllables.join(self.separator))?;
                if self.show_route {
                    write!(self.writer, "\t{}", route_name(result.route))?;
                }
                writeln!(self.writer)?;
            }
            OutputFormat::Json => {
                self.writer
                    .write_all(if self.first { b"[\n  " } else { b",\n  " })?;
                let record = WordRecord {
                    word,
                    syllables: &result.syllables,
                    route: self.show_route.then_some(result.route),
                };
                serde_json::to_writer(&mut self.writer, &record)?;
            }
        }
        self.first = false;
        Ok(())
    }

    /// Close the output (e.g. the JSON array) and flush.
    pub fn finish(mut self) -> Result<()> {
        if self.format == OutputFormat::Json {
            let close: &[u8] = if self.first { b"[]\n" } else { b"\n]\n" };
            self.writer.write_all(close)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Write corpus entries, optionally with their occurrence counts.
pub fn write_corpus<W: Write>(
    mut writer: W,
    entries: &[SyllableEntry],
    format: OutputFormat,
    counts: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                if counts {
                    writeln!(writer, "{}\t{}", entry.syllable, entry.count)?;
                } else {
                    writeln!(writer, "{}", entry.syllable)?;
                }
            }
        }
        OutputFormat::Json if counts => {
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writeln!(writer)?;
        }
        OutputFormat::Json => {
            let syllables: Vec<&str> = entries.iter().map(|e| e.syllable.as_str()).collect();
            serde_json::to_writer_pretty(&mut writer, &syllables)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn route_name(route: Route) -> &'static str {
    match route {
        Route::Empty => "empty",
        Route::Trivial => "trivial",
        Route::Monosyllabic => "monosyllabic",
        Route::Dictionary => "dictionary",
        Route::FallbackUnknown => "fallback_unknown",
        Route::FallbackMismatch => "fallback_mismatch",
    }
}
