//! Command line argument parsing for Lexis CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexis - check recognized words against a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Check recognized words against a sorted dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check words against a dictionary
    Check(CheckArgs),

    /// Verify that a dictionary is sorted
    Validate(ValidateArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the word list
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Dictionary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Correction table with "misspelling correction" per line
    #[arg(long, value_name = "CORRECTIONS_FILE")]
    pub corrections: Option<PathBuf>,

    /// Check that the dictionary is sorted before searching
    #[arg(long)]
    pub verify_order: bool,

    /// Lowercase words before searching
    #[arg(long)]
    pub lowercase: bool,

    /// Accept ASCII letters only
    #[arg(long)]
    pub ascii: bool,
}

/// Arguments for dictionary validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the word list
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the word list
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}
