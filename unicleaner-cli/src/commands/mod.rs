//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod clean;
pub mod config;
pub mod highlight;
pub mod shared;
pub mod stats;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove invisible characters and redundant whitespace
    Clean(clean::CleanArgs),

    /// Show where invisible characters and double spaces are
    Highlight(highlight::HighlightArgs),

    /// Count characters, invisible characters and double spaces
    Stats(stats::StatsArgs),

    /// Write a configuration template
    GenerateConfig(config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(config::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Clean(args) => args.execute(),
            Commands::Highlight(args) => args.execute(),
            Commands::Stats(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    println!("{:<10} {}", format.name(), format.description());
                }
            }
        }
    }
}
