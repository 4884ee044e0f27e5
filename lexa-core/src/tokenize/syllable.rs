//! Syllable segmentation by the Sonority Sequencing Principle
//!
//! Each interior character is compared with its neighbours by sonority rank.
//! A dip in sonority starts a new syllable; a plateau after a fall closes the
//! current one. Punctuation, digits and whitespace stand alone. A final pass
//! folds vowelless fragments into a neighbour.

use std::sync::Arc;

use super::Tokenizer;
use crate::classify::CharClassifier;
use crate::language::{Language, LanguageRules};
use crate::Result;

/// Sonority based syllable tokenizer
#[derive(Debug, Clone)]
pub struct SyllableTokenizer {
    language: Language,
    rules: Arc<LanguageRules>,
}

impl SyllableTokenizer {
    /// Create a tokenizer with the embedded rules for `language`
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self {
            language,
            rules: language.rules()?,
        })
    }

    /// Create a tokenizer from externally loaded rules
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

    /// Split a word into syllables
    ///
    /// Words of two characters or fewer are returned whole, so `"!?"` stays
    /// a single unit.
    pub fn syllables(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= 2 {
            return vec![word.to_string()];
        }

        let classifier = self.rules.classifier();
        let last = chars.len() - 1;
        let mut units: Vec<String> = Vec::new();
        let mut syllable = String::from(chars[0]);

        for i in 1..last {
            let focus = chars[i];

            if classifier.is_separator(focus) {
                units.push(std::mem::take(&mut syllable));
                units.push(focus.to_string());
                continue;
            }

            let prev = classifier.rank(chars[i - 1]);
            let rank = classifier.rank(focus);
            let next = classifier.rank(chars[i + 1]);

            if prev >= rank && rank == next {
                // break after the focus
                syllable.push(focus);
                units.push(std::mem::take(&mut syllable));
            } else if prev > rank && rank < next {
                // break before the focus
                units.push(std::mem::take(&mut syllable));
                syllable.push(focus);
            } else {
                syllable.push(focus);
            }
        }

        if classifier.is_punctuation(chars[last]) {
            units.push(syllable);
            units.push(chars[last].to_string());
        } else {
            syllable.push(chars[last]);
            units.push(syllable);
        }

        merge_vowelless(classifier, units)
    }
}

/// Fold units without a vowel into the preceding unit
///
/// Empty units are dropped. A lone punctuation or whitespace character is
/// kept as its own unit and closes the unit being built. A vowelless run at
/// the start of a stretch is carried forward into the first unit that has a
/// vowel.
fn merge_vowelless(classifier: &CharClassifier, units: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(units.len());
    let mut current = String::new();

    for unit in units {
        if unit.is_empty() {
            continue;
        }

        let mut chars = unit.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if classifier.is_punctuation(ch) || ch.is_whitespace() {
                if !current.is_empty() {
                    merged.push(std::mem::take(&mut current));
                }
                merged.push(unit);
                continue;
            }
        }

        if current.is_empty() {
            current = unit;
        } else if classifier.has_vowel(&unit) && classifier.has_vowel(&current) {
            merged.push(std::mem::replace(&mut current, unit));
        } else {
            current.push_str(&unit);
        }
    }

    if !current.is_empty() {
        merged.push(current);
    }
    merged
}

impl Tokenizer for SyllableTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.syllables(text)
    }
}
