//! Type counting
//!
//! A type is a distinct stem. Counting tokenizes, stems every token and
//! tallies the stems.

use std::collections::HashMap;
use std::sync::Arc;

use crate::language::Language;
use crate::stem::{Porter2Stemmer, Stemmer};
use crate::tokenize::{RegexTokenizer, Tokenizer};
use crate::Result;

/// Tokenize, stem and count
#[derive(Clone)]
pub struct TypeCounter {
    language: Language,
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: Arc<dyn Stemmer>,
}

impl TypeCounter {
    /// Word regex tokenizer and Porter2 stemmer for `language`
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self {
            language,
            tokenizer: Arc::new(RegexTokenizer::english_words()?),
            stemmer: Arc::new(Porter2Stemmer::new(language)?),
        })
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the stemmer
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }

    /// Count each stem in `text`
    pub fn type_count(&self, text: &str) -> HashMap<String, usize> {
        let tokens = self.tokenizer.tokenize(text);
        let stems = self.stemmer.stem_all(&tokens);
        Self::count_types(&stems)
    }

    /// Count each distinct token
    pub fn count_types<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, usize> {
        let mut types: HashMap<String, usize> = HashMap::with_capacity(tokens.len() / 5);
        for token in tokens {
            *types.entry(token.as_ref().to_string()).or_default() += 1;
        }
        types
    }
}

impl std::fmt::Debug for TypeCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCounter")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
