//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub sentences: Sentences,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    pub syllables: Syllables,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence boundary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentences {
    pub terminators: Vec<char>,
    #[serde(default)]
    pub ellipsis: Ellipsis,
}

/// Ellipsis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default)]
    pub treat_as_boundary: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Abbreviation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Syllable segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Syllables {
    pub vowels: String,
    pub sonority: Vec<SonorityClass>,
}

/// One rung of the sonority hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonorityClass {
    pub class: LetterClass,
    pub rank: u8,
    pub chars: String,
}

/// Phonetic class of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterClass {
    Vowel,
    Nasal,
    Fricative,
    Stop,
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(source: &str, toml_str: &str) -> crate::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::Error::ConfigParse {
            path: source.to_string(),
            error: e.to_string(),
        })
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.sentences.terminators.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if self.syllables.vowels.is_empty() {
            return Err("No vowels defined".to_string());
        }

        if self.syllables.sonority.is_empty() {
            return Err("No sonority classes defined".to_string());
        }

        // A letter may sit on exactly one rung of the hierarchy
        let mut seen: HashMap<char, LetterClass> = HashMap::new();
        for entry in &self.syllables.sonority {
            for ch in entry.chars.chars().flat_map(char::to_lowercase) {
                if let Some(previous) = seen.insert(ch, entry.class) {
                    return Err(format!(
                        "Letter '{ch}' appears in both {previous:?} and {:?} sonority classes",
                        entry.class
                    ));
                }
            }
        }

        if self.sentences.ellipsis.treat_as_boundary
            && self.sentences.ellipsis.patterns.iter().all(|p| p.is_empty())
        {
            return Err("Ellipsis boundaries enabled without any pattern".to_string());
        }

        Ok(())
    }
}
