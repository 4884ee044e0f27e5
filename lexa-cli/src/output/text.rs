use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text, one record per line
pub struct TextFormatter<W: Write> {
    writer: W,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, sources: 0 }
    }

    /// Recover the writer, mainly for tests
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, _source: &str) -> Result<()> {
        if self.sources > 0 {
            writeln!(self.writer)?;
        }
        self.sources += 1;
        Ok(())
    }

    fn format_record(&mut self, record: &Record) -> Result<()> {
        match record {
            Record::Stem { word, stem } => writeln!(self.writer, "{word}\t{stem}")?,
            Record::Syllables { word, syllables } => {
                writeln!(self.writer, "{word}\t{}", syllables.join("-"))?
            }
            Record::Sentence { text, .. } => writeln!(self.writer, "{text}")?,
            Record::Stats(stats) => {
                writeln!(self.writer, "characters: {}", stats.characters)?;
                writeln!(self.writer, "bytes: {}", stats.bytes)?;
                writeln!(self.writer, "words: {}", stats.words)?;
                writeln!(self.writer, "sentences: {}", stats.sentences)?;
                writeln!(self.writer, "syllables: {}", stats.syllables)?;
                writeln!(self.writer, "types: {}", stats.types)?;
                writeln!(self.writer, "reading ease: {}", score(stats.reading_ease))?;
                writeln!(self.writer, "grade level: {}", score(stats.grade_level))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub(crate) fn score(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
