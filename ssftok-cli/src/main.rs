//! `ssftok` command-line entry point

use clap::Parser;
use ssftok_cli::commands::Commands;

/// Tokenize and sentence-segment text into SSF blocks
#[derive(Debug, Parser)]
#[command(name = "ssftok", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
