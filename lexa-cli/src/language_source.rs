//! Where language rules come from

use anyhow::{Context, Result};
use lexa_core::{Language, LanguageRules};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of language rules
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Rules bundled with the library
    BuiltIn(Language),
    /// Segmentation rules from a TOML file; stemming still follows `language`
    External { path: PathBuf, language: Language },
}

impl LanguageSource {
    pub fn language(&self) -> Language {
        match self {
            LanguageSource::BuiltIn(language) => *language,
            LanguageSource::External { language, .. } => *language,
        }
    }

    /// Load the rule tables this source describes
    pub fn load(&self) -> Result<Arc<LanguageRules>> {
        match self {
            LanguageSource::BuiltIn(language) => Ok(language.rules()?),
            LanguageSource::External { path, .. } => {
                let rules = LanguageRules::from_file(path).with_context(|| {
                    format!("Failed to load language config: {}", path.display())
                })?;
                log::info!("Using {} rules from {}", rules.name(), path.display());
                Ok(Arc::new(rules))
            }
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(language) => format!("Built-in: {}", language.name()),
            LanguageSource::External { path, .. } => format!("External: {}", path.display()),
        }
    }
}
