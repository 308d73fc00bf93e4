// textropy/src/main.rs
//! Textropy entry point.
//!
//! Reads the input (file or stdin) as raw bytes, hands them to the
//! statistics engine, and renders the result in the requested format.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use textropy::cli::{Cli, OutputFormat};
use textropy::{logger, report};
use textropy_core::analyze_bytes;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let raw = match &args.input {
        Some(path) => fs::read(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };
    debug!("Read {} bytes of input", raw.len());

    let result = analyze_bytes(&raw).context("Analysis failed")?;
    debug!(
        "Analysis complete: {} total symbols, {} unique, entropy {:.4}",
        result.total_chars, result.unique_chars, result.entropy
    );

    match args.format {
        OutputFormat::Json => report::print_json(&result, args.categories)?,
        OutputFormat::Text => {
            report::print_text(&result, args.top, args.categories, args.no_table)?
        }
    }

    Ok(())
}
