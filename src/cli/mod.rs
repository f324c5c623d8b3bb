//! Command-line interface for multimemo.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::CONFIG_FILE;

/// multimemo - private persistent variables for plain functions.
#[derive(Parser, Debug)]
#[command(name = "multimemo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the bundled counter: prints 0, 1, 2 by default.
    Demo {
        /// Number of calls (defaults to the config value).
        #[arg(short = 'n', long)]
        calls: Option<usize>,

        /// Name of the privatized slot (defaults to the config value).
        #[arg(short, long)]
        slot: Option<String>,
    },

    /// Validates a list of slot names and prints the generated declaration.
    Check {
        /// Slot names, in declaration order.
        names: Vec<String>,

        /// Reject repeated names.
        #[arg(long)]
        strict: bool,

        /// Print a JSON report.
        #[arg(long)]
        json: bool,
    },

    /// Writes a default configuration file.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Shows version.
    Version,
}
