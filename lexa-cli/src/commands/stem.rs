//! Stem command implementation

use anyhow::Result;
use clap::Args;
use lexa_core::{Porter2Stemmer, RegexTokenizer, Stemmer, Tokenizer};
use std::collections::HashSet;

use super::InputArgs;
use crate::output::Record;

/// Arguments for the stem command
#[derive(Debug, Args)]
pub struct StemArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only stem purely alphabetic tokens
    #[arg(long)]
    pub alphabet_only: bool,

    /// Lower-case tokens before stemming
    #[arg(long)]
    pub lowercase: bool,

    /// Report each distinct token once
    #[arg(long)]
    pub unique: bool,
}

impl StemArgs {
    pub fn execute(&self) -> Result<()> {
        let session = self.input.prepare()?;
        let stemmer = Porter2Stemmer::new(session.language())?;
        let tokenizer = if self.alphabet_only {
            RegexTokenizer::english_alphabet_only()?
        } else {
            RegexTokenizer::english_words()?
        };

        session.process(|text| Ok(self.records(text, &tokenizer, &stemmer)))
    }

    fn records(&self, text: &str, tokenizer: &dyn Tokenizer, stemmer: &dyn Stemmer) -> Vec<Record> {
        let mut tokens = tokenizer.tokenize(text);
        if self.lowercase {
            tokens = tokens.into_iter().map(|t| t.to_lowercase()).collect();
        }
        if self.unique {
            let mut seen = HashSet::new();
            tokens.retain(|t| seen.insert(t.clone()));
        }

        let stems = stemmer.stem_all(&tokens);
        tokens
            .into_iter()
            .zip(stems)
            .map(|(word, stem)| Record::Stem { word, stem })
            .collect()
    }
}
