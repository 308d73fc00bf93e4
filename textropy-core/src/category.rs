//! Coarse symbol categories for reporting.
//!
//! Categories group the probability distribution for presentation only; they
//! have no effect on frequency or entropy computation. Classification is a
//! priority chain, not a set of mutually exclusive character classes, so the
//! test order in [`categorize`] is load-bearing.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Unicode decimal digits (the `Nd` general category), so digits of any
/// script count, not just ASCII.
static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d").expect("decimal digit class must compile"));

/// The literal punctuation marks recognized by the classifier. Punctuation
/// outside this set (and outside the cleaner's denylist) falls through to
/// `Other`.
const PUNCTUATION_MARKS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '-'];

/// One of six coarse classes a symbol can belong to.
///
/// `LatinLetter` is an intentional simplification: every non-Cyrillic
/// alphabetic character collapses into it regardless of actual script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Whitespace,
    Digit,
    Punctuation,
    CyrillicLetter,
    LatinLetter,
    Other,
}

impl Category {
    /// All categories, in their fixed reporting order.
    pub const ALL: [Category; 6] = [
        Category::Whitespace,
        Category::Digit,
        Category::Punctuation,
        Category::CyrillicLetter,
        Category::LatinLetter,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Whitespace => "Whitespace",
            Category::Digit => "Digits",
            Category::Punctuation => "Punctuation",
            Category::CyrillicLetter => "Cyrillic",
            Category::LatinLetter => "Latin",
            Category::Other => "Other",
        };
        f.write_str(name)
    }
}

/// A probability distribution partitioned by [`Category`].
///
/// All six categories are always present as keys, possibly with empty
/// sub-maps, so consumers can render a fixed six-panel layout without
/// existence checks.
pub type CategorizedDistribution = BTreeMap<Category, HashMap<char, f64>>;

/// Classifies a single symbol.
///
/// The checks are applied in strict priority order: whitespace, then decimal
/// digit, then the literal punctuation set, then the Cyrillic block
/// (U+0400..=U+04FF), then any other alphabetic character, then `Other`.
pub fn categorize(c: char) -> Category {
    if c.is_whitespace() {
        Category::Whitespace
    } else if DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0u8; 4])) {
        Category::Digit
    } else if PUNCTUATION_MARKS.contains(&c) {
        Category::Punctuation
    } else if ('\u{0400}'..='\u{04FF}').contains(&c) {
        Category::CyrillicLetter
    } else if c.is_alphabetic() {
        Category::LatinLetter
    } else {
        Category::Other
    }
}

/// Partitions a probability table by applying [`categorize`] to each key.
pub fn build_categorized_distribution(
    probabilities: &HashMap<char, f64>,
) -> CategorizedDistribution {
    let mut groups: CategorizedDistribution = Category::ALL
        .iter()
        .map(|&category| (category, HashMap::new()))
        .collect();

    for (&symbol, &probability) in probabilities {
        groups
            .entry(categorize(symbol))
            .or_default()
            .insert(symbol, probability);
    }

    groups
}
