//! Language configuration loader
//!
//! Embedded configurations are parsed on first access and cached for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::language::rules::LanguageRules;
use crate::{Error, Result};

/// Bundled English configuration source
pub(crate) const ENGLISH_TOML: &str = include_str!("../../configs/languages/english.toml");

/// Embedded language rules keyed by code and lower-case name
static EMBEDDED: OnceLock<HashMap<String, Arc<LanguageRules>>> = OnceLock::new();

/// Load shared language rules by code or name
pub fn get_rules(code: &str) -> Result<Arc<LanguageRules>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match load_embedded_language("english", ENGLISH_TOML) {
            Ok(rules) => {
                map.insert("english".to_string(), Arc::clone(&rules));
                map.insert(rules.code().to_string(), rules);
            }
            Err(e) => {
                tracing::warn!("failed to load embedded English config: {e}");
            }
        }

        map
    });

    embedded
        .get(code.trim().to_ascii_lowercase().as_str())
        .cloned()
        .ok_or_else(|| Error::UnsupportedLanguage {
            code: code.to_string(),
        })
}

fn load_embedded_language(name: &str, toml_str: &str) -> Result<Arc<LanguageRules>> {
    let rules = LanguageRules::from_toml(&format!("<embedded {name}>"), toml_str)?;
    Ok(Arc::new(rules))
}
