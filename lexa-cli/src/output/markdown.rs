use super::text::score;
use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Markdown: a heading per source, numbered items, and a closing total
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    item_count: usize,
    total: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            item_count: 0,
            total: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        if self.total > 0 || self.item_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.item_count = 0;
        Ok(())
    }

    fn format_record(&mut self, record: &Record) -> Result<()> {
        self.item_count += 1;
        self.total += 1;
        let n = self.item_count;
        match record {
            Record::Stem { word, stem } => writeln!(self.writer, "{n}. {word} → `{stem}`")?,
            Record::Syllables { word, syllables } => {
                writeln!(self.writer, "{n}. {word} → {}", syllables.join(" · "))?
            }
            Record::Sentence { text, .. } => writeln!(self.writer, "{n}. {text}")?,
            Record::Stats(stats) => {
                writeln!(self.writer, "| metric | value |")?;
                writeln!(self.writer, "|---|---|")?;
                writeln!(self.writer, "| characters | {} |", stats.characters)?;
                writeln!(self.writer, "| bytes | {} |", stats.bytes)?;
                writeln!(self.writer, "| words | {} |", stats.words)?;
                writeln!(self.writer, "| sentences | {} |", stats.sentences)?;
                writeln!(self.writer, "| syllables | {} |", stats.syllables)?;
                writeln!(self.writer, "| types | {} |", stats.types)?;
                writeln!(self.writer, "| reading ease | {} |", score(stats.reading_ease))?;
                writeln!(self.writer, "| grade level | {} |", score(stats.grade_level))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total items: {}*", self.total)?;
        self.writer.flush()?;
        Ok(())
    }
}
