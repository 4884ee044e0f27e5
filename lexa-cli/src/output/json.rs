use super::{OutputFormatter, Record};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// All records for one input file
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceRecords {
    pub source: String,
    pub records: Vec<Record>,
}

/// Buffers everything and writes a single JSON array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sources: Vec<SourceRecords>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sources: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.sources.push(SourceRecords {
            source: source.to_string(),
            records: Vec::new(),
        });
        Ok(())
    }

    fn format_record(&mut self, record: &Record) -> Result<()> {
        if self.sources.is_empty() {
            self.begin_source("<input>")?;
        }
        if let Some(current) = self.sources.last_mut() {
            current.records.push(record.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_grouped_by_source() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.begin_source("a.txt").unwrap();
        formatter
            .format_record(&Record::Sentence {
                index: 0,
                text: "Hi.".to_string(),
            })
            .unwrap();
        formatter.begin_source("b.txt").unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<SourceRecords> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].source, "a.txt");
        assert_eq!(
            parsed[0].records,
            [Record::Sentence {
                index: 0,
                text: "Hi.".to_string()
            }]
        );
        assert!(parsed[1].records.is_empty());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_record(&Record::Stem {
                word: "a".to_string(),
                stem: "a".to_string(),
            })
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains(r#""source":"<input>""#));
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
