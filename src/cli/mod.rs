//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{EdgesCommand, ValidateCommand};

/// Dependency discovery for CI trigger steps
#[derive(Debug, Parser, Clone)]
#[command(name = "trigger-graph")]
#[command(author = "trigger-graph Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Discovers which CI jobs trigger which", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the trigger edges of one job or of every job
    Edges(EdgesCommand),

    /// Validate an instance configuration
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
