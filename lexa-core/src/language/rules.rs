//! Runtime language rules
//!
//! Bridges a parsed [`LanguageConfig`] and the lookup tables the segmenters
//! consult on the hot path.

use std::path::Path;

use crate::classify::CharClassifier;
use crate::language::config::LanguageConfig;
use crate::language::tables::{AbbreviationTable, EllipsisSet, TermTable};
use crate::{Error, Result};

/// Immutable rule tables for one language
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    terminators: TermTable,
    abbreviations: AbbreviationTable,
    ellipsis: EllipsisSet,
    classifier: CharClassifier,
}

impl LanguageRules {
    /// Build rules from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(Error::Configuration)?;

        let terminators = TermTable::new(config.sentences.terminators.iter().copied());
        let abbreviations =
            AbbreviationTable::from_categories(config.abbreviations.categories.clone());
        let ellipsis = EllipsisSet::new(
            config.sentences.ellipsis.patterns.clone(),
            config.sentences.ellipsis.treat_as_boundary,
        );
        let classifier = CharClassifier::new(&config.syllables)?;

        tracing::debug!(
            code = %config.metadata.code,
            abbreviations = abbreviations.len(),
            terminators = config.sentences.terminators.len(),
            "built language rules"
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators,
            abbreviations,
            ellipsis,
            classifier,
        })
    }

    /// Parse and build rules from TOML text
    pub fn from_toml(source: &str, toml_str: &str) -> Result<Self> {
        let config = LanguageConfig::from_toml(source, toml_str)?;
        Self::from_config(&config)
    }

    /// Load rules from an external TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading language configuration");
        Self::from_toml(&path.display().to_string(), &content)
    }

    /// Language code from the configuration metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language name from the configuration metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terminators(&self) -> &TermTable {
        &self.terminators
    }

    pub fn abbreviations(&self) -> &AbbreviationTable {
        &self.abbreviations
    }

    pub fn ellipsis(&self) -> &EllipsisSet {
        &self.ellipsis
    }

    pub fn classifier(&self) -> &CharClassifier {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = include_str!("../../configs/languages/english.toml");

    #[test]
    fn test_english_rules_build() {
        let rules = LanguageRules::from_toml("english", ENGLISH).unwrap();
        assert_eq!(rules.code(), "en");
        assert_eq!(rules.name(), "English");
        assert!(rules.terminators().is_terminator('?'));
        assert!(rules.abbreviations().contains("Mrs."));
        assert!(!rules.ellipsis().treat_as_boundary());
        assert!(rules.classifier().is_vowel('y'));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let broken = ENGLISH.replace("terminators = [\".\", \"!\", \"?\"]", "terminators = []");
        let err = LanguageRules::from_toml("broken", &broken).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LanguageRules::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
