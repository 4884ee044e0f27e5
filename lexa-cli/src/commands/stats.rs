//! Stats command implementation

use anyhow::Result;
use clap::Args;
use lexa_core::{Porter2Stemmer, RegexTokenizer, Stemmer, Text, Tokenizer};
use std::sync::Arc;

use super::{InputArgs, Session};
use crate::output::{Record, TextStats};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl StatsArgs {
    pub fn execute(&self) -> Result<()> {
        let session = self.input.prepare()?;
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(RegexTokenizer::english_words()?);
        let stemmer: Arc<dyn Stemmer> = Arc::new(Porter2Stemmer::new(session.language())?);

        session.process(|text| {
            let stats = text_stats(text, &session, &tokenizer, &stemmer)?;
            Ok(vec![Record::Stats(stats)])
        })
    }
}

fn text_stats(
    content: &str,
    session: &Session,
    tokenizer: &Arc<dyn Tokenizer>,
    stemmer: &Arc<dyn Stemmer>,
) -> Result<TextStats> {
    let text = Text::builder()
        .language(session.language())
        .rules(Arc::clone(&session.rules))
        .tokenizer(Arc::clone(tokenizer))
        .stemmer(Arc::clone(stemmer))
        .build(content)?;

    Ok(TextStats {
        characters: text.char_len(),
        bytes: text.byte_len(),
        words: text.word_count(),
        sentences: text.sentence_count(),
        syllables: text.syllable_count(),
        types: text.type_count().len(),
        reading_ease: text.flesch_kincaid_reading_ease().ok(),
        grade_level: text.flesch_kincaid_grade_level().ok(),
    })
}
