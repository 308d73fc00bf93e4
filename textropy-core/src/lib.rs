// textropy-core/src/lib.rs
//! # Textropy Core Library
//!
//! `textropy-core` provides the fundamental, platform-independent logic for
//! character-level text statistics: cleaning a raw character stream, counting
//! symbol occurrences, deriving an empirical probability distribution,
//! computing its Shannon entropy, and grouping symbols into coarse reporting
//! categories.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text into an [`AnalysisResult`], without concerns
//! for I/O, logging, or application-specific state management. Each call to
//! [`analyze`] operates on freshly constructed local data and returns an
//! immutable result value owned by the caller.
//!
//! ## Modules
//!
//! * `cleaner`: Removes the fixed denylist of special symbols from raw text.
//! * `category`: Classifies symbols into six coarse reporting categories.
//! * `engine`: Frequency counting, probability derivation, and entropy.
//! * `errors`: Structured error types for the library.
//!
//! ## Usage Example
//!
//! ```rust
//! use textropy_core::analyze;
//!
//! fn main() -> Result<(), textropy_core::TextropyError> {
//!     let result = analyze("aab")?;
//!
//!     assert_eq!(result.total_chars, 3);
//!     assert_eq!(result.unique_chars, 2);
//!     assert!((result.entropy - 0.9183).abs() < 1e-4);
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod cleaner;
pub mod engine;
pub mod errors;

pub use category::{build_categorized_distribution, categorize, CategorizedDistribution, Category};
pub use cleaner::clean;
pub use engine::{
    analyze, analyze_bytes, compute_entropy, compute_frequencies, compute_probabilities,
    AnalysisResult, FrequencyTable, ProbabilityTable,
};
pub use errors::TextropyError;
