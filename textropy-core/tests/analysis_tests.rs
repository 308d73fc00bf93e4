// textropy-core/tests/analysis_tests.rs
//! End-to-end analysis tests exercising the public API the way an external
//! caller (the CLI) does: raw text in, one immutable result out.

use textropy_core::{
    analyze, build_categorized_distribution, clean, Category, TextropyError,
};

const EPSILON: f64 = 1e-9;

#[test]
fn analyze_counts_match_cleaned_length() {
    let inputs = ["hello world", "ааа ббб", "1 2 3 4 5", "a@b#c with <tags>"];
    for input in inputs {
        let cleaned = clean(input);
        let result = analyze(input).unwrap();

        assert_eq!(result.total_chars, cleaned.chars().count());
        let count_sum: u64 = result.frequencies.values().sum();
        assert_eq!(count_sum as usize, result.total_chars);

        let probability_sum: f64 = result.probabilities.values().sum();
        assert!((probability_sum - 1.0).abs() < EPSILON);
    }
}

#[test]
fn entropy_is_bounded_by_log2_of_alphabet_size() {
    let inputs = ["aaaa", "aab", "abcd", "the quick brown fox", "Привет!"];
    for input in inputs {
        let result = analyze(input).unwrap();
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.unique_chars as f64).log2() + EPSILON);
    }
}

#[test]
fn entropy_is_zero_iff_single_symbol() {
    let result = analyze("aaaa").unwrap();
    assert_eq!(result.entropy, 0.0);
    assert_eq!(result.unique_chars, 1);
    assert_eq!(result.frequencies[&'a'], 4);

    let result = analyze("aaab").unwrap();
    assert!(result.entropy > 0.0);
}

#[test]
fn uniform_distribution_reaches_the_bound() {
    // Denylisted symbols removed, three symbols left with equal counts.
    let result = analyze("a@b#c").unwrap();
    assert_eq!(result.total_chars, 3);
    assert_eq!(result.unique_chars, 3);
    assert_eq!(result.frequencies[&'a'], 1);
    assert_eq!(result.frequencies[&'b'], 1);
    assert_eq!(result.frequencies[&'c'], 1);
    assert!((result.entropy - 3.0_f64.log2()).abs() < EPSILON);
}

#[test]
fn input_empty_after_cleaning_fails() {
    assert!(matches!(analyze(""), Err(TextropyError::EmptyInput)));
    assert!(matches!(analyze("@#$^&*"), Err(TextropyError::EmptyInput)));
}

#[test]
fn cyrillic_text_is_categorized() {
    let result = analyze("Привет!").unwrap();
    let groups = build_categorized_distribution(&result.probabilities);

    let cyrillic = &groups[&Category::CyrillicLetter];
    assert_eq!(cyrillic.len(), 6);
    for symbol in "Привет".chars() {
        assert!(cyrillic.contains_key(&symbol));
    }
    assert!(groups[&Category::Punctuation].contains_key(&'!'));
    assert!(groups[&Category::LatinLetter].is_empty());
}

#[test]
fn categories_partition_the_probability_table() {
    let result = analyze("Lab 3: энтропия текста, 2024. Почти (но не совсем) готово!").unwrap();
    let groups = build_categorized_distribution(&result.probabilities);

    assert_eq!(groups.len(), 6);
    let grouped_keys: usize = groups.values().map(|sub| sub.len()).sum();
    assert_eq!(grouped_keys, result.probabilities.len());

    for sub in groups.values() {
        for symbol in sub.keys() {
            assert!(result.probabilities.contains_key(symbol));
        }
    }
}
