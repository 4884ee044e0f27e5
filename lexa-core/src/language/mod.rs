//! Language identification and language-specific rule tables
//!
//! Rules are data: each supported language ships a TOML configuration that
//! is embedded in the binary, validated once and shared behind an `Arc`.

pub mod config;
pub(crate) mod loader;
pub mod rules;
pub mod tables;

use std::fmt;
use std::str::FromStr;

pub use config::LanguageConfig;
pub use loader::get_rules;
pub use rules::LanguageRules;

use crate::{Error, Result};

/// Languages with a complete rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// Every supported language
    pub const ALL: &'static [Language] = &[Language::English];

    /// Resolve an ISO 639-1 code or English name, case-insensitively
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            _ => Err(Error::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
        }
    }

    /// Shared rule tables for this language
    pub fn rules(self) -> Result<std::sync::Arc<LanguageRules>> {
        get_rules(self.code())
    }

    /// The bundled TOML configuration, usable as a template for new rule files
    pub fn config_source(self) -> &'static str {
        match self {
            Language::English => loader::ENGLISH_TOML,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
