//! Command-line interface for Probehunt
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing and keeps each command in its own
//! module under `commands/`.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Probehunt - parallel brute-force search over digit-range probe patterns
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Count the probes a pattern can produce
    Count(commands::count::CountArgs),
    /// Print concrete probes in index order
    Probes(commands::probes::ProbesArgs),
    /// Hunt the probe space for a probe matching a target digest
    Search(commands::search::SearchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Count(args)) => commands::count::execute(args, &output),
            Some(Commands::Probes(args)) => commands::probes::execute(args, &output),
            Some(Commands::Search(args)) => commands::search::execute(args, &output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
