//! Syllables command implementation

use anyhow::Result;
use clap::Args;
use lexa_core::{SyllableTokenizer, WhitespaceTokenizer};
use std::collections::HashSet;
use std::sync::Arc;

use super::InputArgs;
use crate::output::Record;

/// Arguments for the syllables command
#[derive(Debug, Args)]
pub struct SyllablesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Report each distinct word once
    #[arg(long)]
    pub unique: bool,
}

impl SyllablesArgs {
    pub fn execute(&self) -> Result<()> {
        let session = self.input.prepare()?;
        let tokenizer = SyllableTokenizer::with_rules(session.language(), Arc::clone(&session.rules));

        session.process(|text| Ok(self.records(text, &tokenizer)))
    }

    fn records(&self, text: &str, tokenizer: &SyllableTokenizer) -> Vec<Record> {
        let mut seen = HashSet::new();
        WhitespaceTokenizer::new()
            .words(text)
            .filter(|word| !self.unique || seen.insert(*word))
            .map(|word| Record::Syllables {
                word: word.to_string(),
                syllables: tokenizer.syllables(word),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lexa_core::Language;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SyllablesArgs,
    }

    fn records(flags: &[&str], text: &str) -> Vec<Record> {
        let cli = TestCli::try_parse_from(
            ["lexa", "-i", "x.txt"].into_iter().chain(flags.iter().copied()),
        )
        .unwrap();
        let tokenizer = SyllableTokenizer::new(Language::English).unwrap();
        cli.args.records(text, &tokenizer)
    }

    #[test]
    fn test_one_record_per_word() {
        let records = records(&[], "justification  justification");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record::Syllables {
                word: "justification".to_string(),
                syllables: ["jus", "ti", "fi", "ca", "tion"].map(String::from).to_vec(),
            }
        );
    }

    #[test]
    fn test_unique_words() {
        assert_eq!(records(&["--unique"], "cat cat dog").len(), 2);
    }

    #[test]
    fn test_blank_input() {
        assert!(records(&[], " \n\t ").is_empty());
    }
}
