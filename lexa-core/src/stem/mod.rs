//! Stemming
//!
//! A stemmer reduces an inflected word to a canonical stem. Stems are not
//! required to be dictionary words; they only have to be stable so that
//! related forms collapse to the same key.

pub mod porter2;
pub mod regions;
pub mod rules;

pub use porter2::Porter2Stemmer;

use crate::tokenize::Tokenizer;

/// Word to stem transformation
pub trait Stemmer: Send + Sync {
    /// Stem a single word; never fails
    fn stem(&self, word: &str) -> String;

    /// Stem a batch of words, in order
    fn stem_all(&self, words: &[String]) -> Vec<String> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            words.par_iter().map(|word| self.stem(word)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            words.iter().map(|word| self.stem(word)).collect()
        }
    }
}

/// Stemmer that returns every word unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStemmer;

impl Stemmer for NoOpStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Splits on whitespace and stems each word
impl Tokenizer for Porter2Stemmer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|word| self.stem(word)).collect()
    }
}
