//! Validate command implementation

use anyhow::Result;
use clap::Args;
use lexa_core::LanguageRules;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match LanguageRules::from_file(&self.language_config) {
            Ok(rules) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.name());
                println!("  Abbreviations: {}", rules.abbreviations().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ValidationFailed(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexa_core::Language;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        ValidateArgs {
            language_config: file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_bundled_config_is_valid() {
        assert!(validate(Language::English.config_source()).is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let content = Language::English
            .config_source()
            .replace("code = \"en\"", "code = \"\"");
        let err = validate(&content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_syntax_error_rejected() {
        assert!(validate("[metadata\ncode = \"xx\"").is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        let args = ValidateArgs {
            language_config: PathBuf::from("/nonexistent/rules.toml"),
        };
        assert!(args.execute().is_err());
    }
}
