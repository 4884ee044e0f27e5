//! Sentences command implementation

use anyhow::Result;
use clap::Args;
use lexa_core::SentenceSegmenter;
use std::sync::Arc;

use super::InputArgs;
use crate::output::Record;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl SentencesArgs {
    pub fn execute(&self) -> Result<()> {
        let session = self.input.prepare()?;
        let segmenter = SentenceSegmenter::with_rules(session.language(), Arc::clone(&session.rules));

        session.process(|text| Ok(records(text, &segmenter)))
    }
}

fn records(text: &str, segmenter: &SentenceSegmenter) -> Vec<Record> {
    segmenter
        .sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, text)| Record::Sentence { index, text })
        .collect()
}
