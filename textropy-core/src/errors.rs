//! errors.rs - Custom error types for the textropy-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::str::Utf8Error;
use thiserror::Error;

/// This enum represents all possible error types in the `textropy-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
///
/// All failures here stem from invalid input, not transient conditions, so no
/// retry semantics are attached to any variant.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TextropyError {
    /// The cleaned text contains no characters, so frequencies and
    /// probabilities are undefined.
    #[error("Cleaned text is empty; no symbols to analyze")]
    EmptyInput,

    /// A probability derivation was attempted with a zero total count.
    /// Equivalent to the empty-input guard, surfaced for callers that invoke
    /// the probability step directly.
    #[error("Total symbol count is zero; cannot derive probabilities")]
    DivisionByZero,

    /// The raw input bytes could not be decoded as UTF-8. Rejected outright
    /// rather than counted lossily, which would silently corrupt frequencies.
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] Utf8Error),
}
