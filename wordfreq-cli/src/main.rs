//! wordfreq command-line entry point

use anyhow::Result;
use clap::Parser;
use wordfreq_cli::commands::Commands;

/// Count words in text files and render frequency reports
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
