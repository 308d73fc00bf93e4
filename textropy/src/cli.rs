// textropy/src/cli.rs
//! This file defines the command-line interface (CLI) for the textropy
//! application, including all available arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary, frequency table, and optional category panels.
    Text,
    /// The full analysis result as a JSON document.
    Json,
}

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "textropy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Measure the character-level Shannon entropy of a text file",
    long_about = "Textropy reads a UTF-8 text file (or stdin), strips a fixed set of special \
symbols, and reports the empirical symbol distribution: a frequency table sorted by descending \
probability, the Shannon entropy in bits per symbol, and an optional breakdown of the \
distribution into six coarse symbol categories."
)]
pub struct Cli {
    /// Path to a UTF-8 text file (reads from stdin if not provided).
    #[arg(value_name = "FILE", help = "Read input from a file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Show only the N most probable symbols in the frequency table.
    #[arg(
        long,
        short = 't',
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Limit the frequency table to the N most probable symbols."
    )]
    pub top: Option<usize>,

    /// Break the distribution down into the six symbol categories.
    #[arg(long, short = 'c', help = "Show the probability distribution grouped by symbol category.")]
    pub categories: bool,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value = "text", help = "Select the output format.")]
    pub format: OutputFormat,

    /// Suppress the frequency table, printing the summary only.
    #[arg(long = "no-table", help = "Suppress the frequency table, printing the summary only.")]
    pub no_table: bool,

    /// Disable informational messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
