//! Command-line interface for Quartet.

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quartet - four small utilities behind one binary.
#[derive(Parser, Debug)]
#[command(name = "quartet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "quartet.toml")]
    pub config: PathBuf,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initializes configuration in the current directory.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Evaluates the n-th Fibonacci number with a memoizing cache.
    Fib {
        /// Sequence indices to evaluate, in order, against one shared cache.
        #[arg(required = true)]
        indices: Vec<i64>,

        /// Prints cache hit/miss statistics after evaluating.
        #[arg(short, long)]
        stats: bool,
    },

    /// Sums every standalone decimal number found in the given text.
    Sum {
        /// Text to scan; read from stdin when omitted.
        text: Option<String>,
    },

    /// Counts log records per level in a log file.
    Logscan {
        /// Path to the log file.
        path: PathBuf,

        /// Level whose records should be printed in full.
        level: Option<String>,

        /// Emits the counts as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Starts the interactive contact assistant bot.
    Bot,

    /// Configures options interactively.
    Config,

    /// Shows version.
    Version,
}
