use clap::Parser;
use lexa_cli::commands::Commands;
use std::process::ExitCode;

/// Stem, syllabify and segment English text
#[derive(Debug, Parser)]
#[command(name = "lexa", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
