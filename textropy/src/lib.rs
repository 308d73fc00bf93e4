// textropy/src/lib.rs
//! # Textropy CLI Application
//!
//! This crate provides the terminal interface for the textropy statistics
//! engine: argument parsing, file/stdin reading, and rendering of the
//! frequency table, summary, and category breakdown. All computation lives
//! in `textropy-core`; this crate only consumes its results.

pub mod cli;
pub mod logger;
pub mod report;
