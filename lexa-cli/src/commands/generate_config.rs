//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use lexa_core::Language;
use std::fs;
use std::path::PathBuf;

use super::LanguageArg;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language whose bundled rules seed the template
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: LanguageArg,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let language = Language::from(self.language);
        fs::write(&self.output, language.config_source())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated: {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to customize terminators, abbreviations or sonority classes");
        println!(
            "2. Validate it: lexa validate -c {}",
            self.output.display()
        );
        println!(
            "3. Use it: lexa sentences -i <FILE> --language-config {}",
            self.output.display()
        );
        Ok(())
    }
}
