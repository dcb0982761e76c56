//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// syncspace - your next call and a live countdown to it
#[derive(Debug, Parser)]
#[command(name = "syncspace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SYNCSPACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// JSON file with the upcoming calls
    #[arg(long, env = "SYNCSPACE_CALLS")]
    pub calls: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the dashboard once (default)
    Show,

    /// Follow the countdown to the nearest meeting until interrupted
    Watch,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
