//! The text-statistics engine: frequency counting, probability derivation,
//! and Shannon entropy over a cleaned character stream.
//!
//! [`analyze`] is the single public entry point that orchestrates the full
//! pipeline; the individual steps are exposed for callers that need to run
//! them separately, and each upholds its own input guard.

use std::collections::HashMap;

use serde::Serialize;

use crate::cleaner::clean;
use crate::errors::TextropyError;

/// Occurrence count per distinct symbol. Counts sum to the cleaned text's
/// symbol count.
pub type FrequencyTable = HashMap<char, u64>;

/// Empirical probability per distinct symbol, each in `(0, 1]`, summing to
/// 1.0 within floating-point tolerance. Iteration order is unspecified;
/// callers needing deterministic output must sort explicitly.
pub type ProbabilityTable = HashMap<char, f64>;

/// The immutable outcome of one analysis run.
///
/// Returned by value from [`analyze`]; the engine holds no state between
/// runs, so callers own the latest result and pass it to whatever rendering
/// they need.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Occurrences of each distinct symbol in the cleaned text.
    pub frequencies: FrequencyTable,
    /// Empirical probability of each distinct symbol.
    pub probabilities: ProbabilityTable,
    /// Shannon entropy of the distribution, in bits per symbol.
    pub entropy: f64,
    /// Symbol count of the cleaned text.
    pub total_chars: usize,
    /// Number of distinct symbols.
    pub unique_chars: usize,
}

/// Counts occurrences of each distinct symbol in a single linear pass.
///
/// Returns [`TextropyError::EmptyInput`] when `cleaned` has no characters,
/// since an empty stream has no meaningful frequency table and would divide
/// by zero downstream.
pub fn compute_frequencies(cleaned: &str) -> Result<FrequencyTable, TextropyError> {
    if cleaned.is_empty() {
        return Err(TextropyError::EmptyInput);
    }

    let mut frequencies = FrequencyTable::new();
    for symbol in cleaned.chars() {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    Ok(frequencies)
}

/// Derives `count / total` for each entry of a frequency table.
///
/// `total` must equal the sum of all counts in `frequencies`; that invariant
/// is the caller's to uphold. A zero `total` fails with
/// [`TextropyError::DivisionByZero`].
pub fn compute_probabilities(
    frequencies: &FrequencyTable,
    total: u64,
) -> Result<ProbabilityTable, TextropyError> {
    if total == 0 {
        return Err(TextropyError::DivisionByZero);
    }

    Ok(frequencies
        .iter()
        .map(|(&symbol, &count)| (symbol, count as f64 / total as f64))
        .collect())
}

/// Computes the Shannon entropy `-Σ p·log2(p)` in bits per symbol.
///
/// Zero probabilities never occur in a well-formed table, but are skipped
/// anyway so a degenerate entry contributes 0 instead of `-inf * 0`. A
/// single-symbol alphabet needs no special case: `log2(1)` is 0.
pub fn compute_entropy(probabilities: &ProbabilityTable) -> f64 {
    probabilities
        .values()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Runs the full pipeline: clean, count, derive probabilities, compute
/// entropy. This is the one entry point external callers need.
pub fn analyze(raw: &str) -> Result<AnalysisResult, TextropyError> {
    let cleaned = clean(raw);
    let total_chars = cleaned.chars().count();

    let frequencies = compute_frequencies(&cleaned)?;
    let probabilities = compute_probabilities(&frequencies, total_chars as u64)?;
    let entropy = compute_entropy(&probabilities);
    let unique_chars = frequencies.len();

    Ok(AnalysisResult {
        frequencies,
        probabilities,
        entropy,
        total_chars,
        unique_chars,
    })
}

/// Validates `raw` as UTF-8 and analyzes it.
///
/// Undecodable input is rejected with [`TextropyError::InvalidEncoding`]
/// instead of being counted lossily, which would corrupt the frequencies.
pub fn analyze_bytes(raw: &[u8]) -> Result<AnalysisResult, TextropyError> {
    let text = std::str::from_utf8(raw)?;
    analyze(text)
}
