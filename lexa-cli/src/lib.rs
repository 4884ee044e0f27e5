//! lexa CLI library
//!
//! Command-line access to stemming, syllable segmentation, sentence
//! segmentation and readability statistics from `lexa-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
