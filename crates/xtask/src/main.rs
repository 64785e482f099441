//! Development tasks for the city yields workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Report, Validate};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Development tasks for the city yields workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for city yield content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve a scenario city and print its yield breakdown
    Report(Report),

    /// Check a ruleset and its mods for content the engine would skip
    Validate(Validate),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Report(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
    }
}
