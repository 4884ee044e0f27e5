//! Loading, validating and sharing language configurations

use std::io::Write;
use std::sync::Arc;

use lexa_core::language::get_rules;
use lexa_core::{
    CharClass, Error, Language, LanguageConfig, LanguageRules, SyllableTokenizer,
};
use tempfile::NamedTempFile;

const ENGLISH: &str = include_str!("../configs/languages/english.toml");

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_embedded_english_is_cached() {
    let a = get_rules("en").unwrap();
    let b = Language::English.rules().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.name(), "English");
}

#[test]
fn test_unsupported_language_fails_at_construction() {
    let err = Language::from_code("fr").unwrap_err();
    assert!(matches!(err, Error::UnsupportedLanguage { .. }));
    assert!(get_rules("fr").is_err());
}

#[test]
fn test_embedded_config_round_trips_through_serde() {
    let config = LanguageConfig::from_toml("english", ENGLISH).unwrap();
    let serialized = toml::to_string(&config).unwrap();
    let reparsed = LanguageConfig::from_toml("reparsed", &serialized).unwrap();
    assert_eq!(reparsed.metadata.code, "en");
    assert_eq!(reparsed.syllables.sonority.len(), 4);
    assert!(LanguageRules::from_config(&reparsed).is_ok());
}

#[test]
fn test_external_file_changes_sonority() {
    // Treat "s" as a stop instead of a fricative
    let config = ENGLISH
        .replace("chars = \"zvsf\"", "chars = \"zvf\"")
        .replace("chars = \"bcdgtkpqxhj\"", "chars = \"bcdgtkpqxhjs\"");
    let file = write_config(&config);

    let rules = LanguageRules::from_file(file.path()).unwrap();
    assert_eq!(rules.classifier().classify('s'), CharClass::Stop);

    let tokenizer = SyllableTokenizer::with_rules(Language::English, Arc::new(rules));
    assert_eq!(tokenizer.rules().classifier().rank('S'), 0);
    assert_eq!(tokenizer.syllables("justification").concat(), "justification");
}

#[test]
fn test_malformed_toml_reports_path() {
    let file = write_config("[metadata\ncode = \"en\"");
    let err = LanguageRules::from_file(file.path()).unwrap_err();
    match err {
        Error::ConfigParse { path, .. } => {
            assert_eq!(path, file.path().display().to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_letters_rejected() {
    let config = ENGLISH.replace("chars = \"zvsf\"", "chars = \"zvsfa\"");
    let err = LanguageRules::from_toml("dup", &config).unwrap_err();
    match err {
        Error::Configuration(message) => assert!(message.contains("'a'"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ellipsis_boundary_requires_patterns() {
    let config = ENGLISH
        .replace("treat_as_boundary = false", "treat_as_boundary = true")
        .replace("patterns = [\"...\"]", "patterns = []");
    assert!(matches!(
        LanguageRules::from_toml("ellipsis", &config),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        LanguageRules::from_file(&missing),
        Err(Error::Io(_))
    ));
}
