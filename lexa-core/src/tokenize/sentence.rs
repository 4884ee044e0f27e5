//! Sentence segmentation
//!
//! Text is split into whitespace-delimited words; a sentence closes at the
//! first word that satisfies the boundary predicate. Words are rejoined with
//! single spaces, so original spacing is normalized.

use std::sync::Arc;

use super::Tokenizer;
use crate::language::{Language, LanguageRules};
use crate::Result;

/// Whitespace-driven sentence segmenter
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    language: Language,
    rules: Arc<LanguageRules>,
}

impl SentenceSegmenter {
    /// Create a segmenter with the embedded rules for `language`
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self {
            language,
            rules: language.rules()?,
        })
    }

    /// Create a segmenter from externally loaded rules
    pub fn with_rules(language: Language, rules: Arc<LanguageRules>) -> Self {
        Self { language, rules }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Read-only rule tables
    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    /// Whether `word` closes a sentence
    ///
    /// True when the word ends in a terminator, is not a listed
    /// abbreviation and contains at most one period.
    pub fn ends_sentence(&self, word: &str) -> bool {
        if self.rules.abbreviations().contains(word) {
            return false;
        }

        if self.rules.terminators().ends_with_terminator(word) && word.matches('.').count() <= 1 {
            return true;
        }

        // "Wait..." closes only when ellipses are configured as boundaries
        let ellipsis = self.rules.ellipsis();
        ellipsis.treat_as_boundary()
            && ellipsis
                .strip_suffix(word)
                .is_some_and(|stem| !stem.is_empty() && !stem.contains('.'))
    }

    /// Split `text` into sentences
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);

            if self.ends_sentence(word) {
                sentences.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            sentences.push(current);
        }

        tracing::trace!(count = sentences.len(), "segmented sentences");
        sentences
    }
}

impl Tokenizer for SentenceSegmenter {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.sentences(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> SentenceSegmenter {
        SentenceSegmenter::new(Language::English).unwrap()
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            segmenter().sentences("Dr. Smith left. He returned."),
            vec!["Dr. Smith left.", "He returned."]
        );
    }

    #[test]
    fn test_initialism_does_not_split() {
        assert_eq!(
            segmenter().sentences("The F.B.I. arrived."),
            vec!["The F.B.I. arrived."]
        );
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(segmenter().sentences("Hello world"), vec!["Hello world"]);
        assert!(segmenter().sentences("").is_empty());
        assert!(segmenter().sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_last_sentence_not_duplicated() {
        assert_eq!(
            segmenter().sentences("One. Two!"),
            vec!["One.", "Two!"]
        );
    }

    #[test]
    fn test_boundary_predicate() {
        let s = segmenter();
        assert!(s.ends_sentence("amazing!?"));
        assert!(s.ends_sentence("$3.14!"));
        assert!(!s.ends_sentence("Mr."));
        assert!(!s.ends_sentence("mr"));
        assert!(!s.ends_sentence("Ph.D."));
        assert!(!s.ends_sentence("105.4%"));
        assert!(!s.ends_sentence("Ellipses..."));
        assert!(!s.ends_sentence(""));
    }

    #[test]
    fn test_whitespace_normalized() {
        assert_eq!(
            segmenter().sentences("  I think so!\t Crazy   times,\nindeed. "),
            vec!["I think so!", "Crazy times, indeed."]
        );
    }
}
