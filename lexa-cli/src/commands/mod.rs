//! Subcommands and the shared file-processing pipeline

pub mod generate_config;
pub mod sentences;
pub mod stats;
pub mod stem;
pub mod syllables;
pub mod validate;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Subcommand, ValueEnum};
use lexa_core::{Language, LanguageRules};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::{create_formatter, open_writer, Record};
use crate::progress::ProgressReporter;

pub use generate_config::GenerateConfigArgs;
pub use sentences::SentencesArgs;
pub use stats::StatsArgs;
pub use stem::StemArgs;
pub use syllables::SyllablesArgs;
pub use validate::ValidateArgs;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reduce words to their Porter2 stems
    Stem(StemArgs),

    /// Split words into syllables
    Syllables(SyllablesArgs),

    /// Split text into sentences
    Sentences(SentencesArgs),

    /// Counts and Flesch-Kincaid readability scores
    Stats(StatsArgs),

    /// Validate a language configuration file
    Validate(ValidateArgs),

    /// Write a language configuration template
    GenerateConfig(GenerateConfigArgs),

    /// List available options
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Stem(args) => args.execute(),
            Commands::Syllables(args) => args.execute(),
            Commands::Sentences(args) => args.execute(),
            Commands::Stats(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Supported languages:");
                for language in Language::ALL {
                    println!("  {:<8} {}", language.code(), language.name());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text      One record per line");
                println!("  json      JSON array grouped by input file");
                println!("  markdown  Numbered lists with a heading per file");
            }
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// Language selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    #[value(alias = "en")]
    English,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
        }
    }
}

/// Arguments shared by every file-processing command
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language (default: from config, then english)
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Segmentation rules from a language configuration file
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// CLI configuration file
    #[arg(long, value_name = "FILE", env = "LEXA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl InputArgs {
    /// Initialize logging and resolve configuration, language and format
    pub fn prepare(&self) -> Result<Session> {
        self.init_logging();

        let config = CliConfig::load(self.config.as_deref())?;

        let language = match self.language {
            Some(arg) => Language::from(arg),
            None => Language::from_code(&config.processing.default_language)
                .context("Invalid default_language in CLI configuration")?,
        };
        let source = match &self.language_config {
            Some(path) => LanguageSource::External {
                path: path.clone(),
                language,
            },
            None => LanguageSource::BuiltIn(language),
        };
        let rules = source.load()?;
        log::info!("Language rules: {}", source.display_name());

        let format = match self.format {
            Some(format) => format,
            None => <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true)
                .map_err(|_| CliError::UnknownFormat(config.output.default_format.clone()))?,
        };

        Ok(Session {
            patterns: self.input.clone(),
            output: self.output.clone(),
            quiet: self.quiet,
            format,
            pretty_json: config.output.pretty_json,
            source,
            rules,
        })
    }

    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when several commands run in one process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .try_init();
    }
}

/// Resolved settings for one file-processing run
#[derive(Debug)]
pub struct Session {
    pub patterns: Vec<String>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub source: LanguageSource,
    pub rules: Arc<LanguageRules>,
}

impl Session {
    pub fn language(&self) -> Language {
        self.source.language()
    }

    /// Analyze every input file in parallel and write the records in file order
    pub fn process<F>(&self, analyze: F) -> Result<()>
    where
        F: Fn(&str) -> Result<Vec<Record>> + Sync,
    {
        let files = resolve_patterns(&self.patterns)?;
        log::info!("Processing {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = files
            .par_iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                let records = analyze(&text)
                    .with_context(|| format!("Failed to analyze {}", path.display()))?;
                log::debug!("{}: {} record(s)", path.display(), records.len());
                progress.file_completed(&path.display().to_string());
                Ok((path.display().to_string(), records))
            })
            .collect::<Result<Vec<_>>>();
        progress.finish();
        let results = results?;

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format, writer, self.pretty_json);
        for (source, records) in &results {
            formatter.begin_source(source)?;
            for record in records {
                formatter.format_record(record)?;
            }
        }
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Output written to {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        input: InputArgs,
    }

    fn parse(args: &[&str]) -> InputArgs {
        TestCli::try_parse_from(std::iter::once("lexa").chain(args.iter().copied()))
            .unwrap()
            .input
    }

    #[test]
    fn test_input_required() {
        assert!(TestCli::try_parse_from(["lexa"]).is_err());
    }

    #[test]
    fn test_multiple_inputs_and_flags() {
        let args = parse(&["-i", "a.txt", "b/*.txt", "-f", "json", "-l", "en", "-vv"]);
        assert_eq!(args.input, ["a.txt", "b/*.txt"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.language, Some(LanguageArg::English));
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);
    }

    #[test]
    fn test_unknown_format_rejected_by_parser() {
        assert!(TestCli::try_parse_from(["lexa", "-i", "a.txt", "-f", "yaml"]).is_err());
    }

    #[test]
    fn test_prepare_uses_config_defaults() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lexa.toml");
        fs::write(
            &config,
            "[processing]\ndefault_language = \"en\"\n[output]\ndefault_format = \"markdown\"\npretty_json = false\n",
        )
        .unwrap();

        let args = parse(&["-q", "-i", "x.txt", "--config", config.to_str().unwrap()]);
        let session = args.prepare().unwrap();
        assert_eq!(session.format, OutputFormat::Markdown);
        assert!(!session.pretty_json);
        assert_eq!(session.language(), Language::English);
    }

    #[test]
    fn test_prepare_rejects_unknown_config_format() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lexa.toml");
        fs::write(&config, "[output]\ndefault_format = \"yaml\"\n").unwrap();

        let args = parse(&["-q", "-i", "x.txt", "--config", config.to_str().unwrap()]);
        let err = args.prepare().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_prepare_rejects_unknown_config_language() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lexa.toml");
        fs::write(&config, "[processing]\ndefault_language = \"klingon\"\n").unwrap();

        let args = parse(&["-q", "-i", "x.txt", "--config", config.to_str().unwrap()]);
        assert!(args.prepare().is_err());
    }

    #[test]
    fn test_process_writes_in_file_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        let output = dir.path().join("out.log");

        let pattern = dir.path().join("*.txt").to_string_lossy().into_owned();
        let args = parse(&["-q", "-f", "text", "-i", &pattern, "-o", output.to_str().unwrap()]);
        let session = args.prepare().unwrap();
        session
            .process(|text| {
                Ok(vec![Record::Sentence {
                    index: 0,
                    text: text.to_string(),
                }])
            })
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "first\n\nsecond\n");
    }
}
