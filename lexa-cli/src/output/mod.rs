//! Output formatting
//!
//! Commands turn each input file into a list of [`Record`]s; a formatter
//! renders them. Formatters see records in input-file order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::commands::OutputFormat;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Summary statistics for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub bytes: usize,
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    /// Distinct stems
    pub types: usize,
    /// Absent when there are no words or no sentences
    pub reading_ease: Option<f64>,
    pub grade_level: Option<f64>,
}

/// One unit of command output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Stem { word: String, stem: String },
    Syllables { word: String, syllables: Vec<String> },
    Sentence { index: usize, text: String },
    Stats(TextStats),
}

/// Renders records for one or more sources
pub trait OutputFormatter: Send {
    /// Called before the records of each input file
    fn begin_source(&mut self, source: &str) -> Result<()>;

    fn format_record(&mut self, record: &Record) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

/// Open the output destination: a file when given, stdout otherwise
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`
pub fn create_formatter<W: Write + Send + 'static>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
