//! CLI command definitions

use clap::Args;

/// Print trigger edges
#[derive(Debug, Args, Clone)]
pub struct EdgesCommand {
    /// Path to instance YAML file
    #[arg(short, long)]
    pub file: String,

    /// Full name of a single job to inspect
    #[arg(short, long)]
    pub job: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Validate an instance configuration
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to instance YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
