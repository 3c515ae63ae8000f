//! Unicleaner CLI library
//!
//! This library provides the command-line interface for finding,
//! highlighting and removing invisible Unicode characters.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Top-level command line
#[derive(Debug, Parser)]
#[command(
    name = "unicleaner",
    version,
    about = "Find, highlight and remove invisible Unicode characters",
    long_about = None
)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,
}

impl Cli {
    /// Run the parsed command
    pub fn run(&self) -> CliResult<()> {
        self.command.execute()
    }
}
