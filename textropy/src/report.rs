// textropy/src/report.rs
//! Rendering of analysis results for the terminal.
//!
//! The engine's tables have no defined iteration order, so every view here
//! sorts explicitly: descending probability, ties broken by code point
//! ascending, which keeps output deterministic for identical input.

use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

use textropy_core::{build_categorized_distribution, AnalysisResult, Category, ProbabilityTable};

/// Renders a symbol for table display.
///
/// Whitespace and control characters would produce invisible or misaligned
/// cells, so they are shown in `\uXXXX` escape notation instead; everything
/// else is shown verbatim.
pub fn display_char(c: char) -> String {
    if c.is_whitespace() || c.is_control() {
        format!("\\u{:04X}", c as u32)
    } else {
        c.to_string()
    }
}

/// Probability entries in display order: descending probability, ties broken
/// by code point ascending.
pub fn sorted_entries(probabilities: &ProbabilityTable) -> Vec<(char, f64)> {
    let mut entries: Vec<(char, f64)> = probabilities
        .iter()
        .map(|(&symbol, &probability)| (symbol, probability))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
}

/// Builds the frequency table, optionally limited to the `top` most probable
/// symbols.
pub fn frequency_table(result: &AnalysisResult, top: Option<usize>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Symbol", "Count", "Probability"]);

    let entries = sorted_entries(&result.probabilities);
    let limit = top.unwrap_or(entries.len());
    for (symbol, probability) in entries.into_iter().take(limit) {
        let count = result.frequencies.get(&symbol).copied().unwrap_or(0);
        table.add_row(vec![
            display_char(symbol),
            count.to_string(),
            format!("{probability:.6}"),
        ]);
    }
    table
}

/// Renders all six category panels, empty ones included, so the layout is
/// fixed regardless of input.
pub fn category_panels(result: &AnalysisResult) -> String {
    let groups = build_categorized_distribution(&result.probabilities);
    let mut output = String::new();

    for category in Category::ALL {
        let sub = &groups[&category];
        output.push_str(&format!("\n{} ({} symbols)\n", category, sub.len()));

        if sub.is_empty() {
            output.push_str("  (none)\n");
            continue;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Symbol", "Probability"]);
        for (symbol, probability) in sorted_entries(sub) {
            table.add_row(vec![display_char(symbol), format!("{probability:.6}")]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output
}

/// Prints the human-readable report: summary block, frequency table, and
/// optional category panels.
pub fn print_text(
    result: &AnalysisResult,
    top: Option<usize>,
    categories: bool,
    no_table: bool,
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let use_color = io::stdout().is_terminal();

    print_summary_line(&mut stdout, use_color, "Entropy", &format!("{:.4} bits/symbol", result.entropy))?;
    print_summary_line(&mut stdout, use_color, "Total characters", &result.total_chars.to_string())?;
    print_summary_line(&mut stdout, use_color, "Unique characters", &result.unique_chars.to_string())?;

    if !no_table {
        writeln!(stdout, "\n{}", frequency_table(result, top))?;
    }
    if categories {
        writeln!(stdout, "{}", category_panels(result))?;
    }
    Ok(())
}

fn print_summary_line(
    writer: &mut impl Write,
    use_color: bool,
    label: &str,
    value: &str,
) -> io::Result<()> {
    if use_color {
        writeln!(writer, "{}: {}", label.bold(), value.green())
    } else {
        writeln!(writer, "{label}: {value}")
    }
}

/// Prints the analysis result as pretty JSON, with the categorized
/// distribution attached when requested.
pub fn print_json(result: &AnalysisResult, categories: bool) -> Result<()> {
    let mut value = serde_json::to_value(result)?;
    if categories {
        let groups = build_categorized_distribution(&result.probabilities);
        value["categories"] = serde_json::to_value(&groups)?;
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use textropy_core::analyze;

    #[test]
    fn test_display_char_passthrough() {
        assert_eq!(display_char('a'), "a");
        assert_eq!(display_char('П'), "П");
        assert_eq!(display_char('!'), "!");
    }

    #[test]
    fn test_display_char_escapes_invisibles() {
        assert_eq!(display_char(' '), "\\u0020");
        assert_eq!(display_char('\n'), "\\u000A");
        assert_eq!(display_char('\t'), "\\u0009");
        assert_eq!(display_char('\u{0007}'), "\\u0007");
    }

    #[test]
    fn test_sorted_entries_order_and_tie_break() {
        let probabilities =
            ProbabilityTable::from([('b', 0.25), ('a', 0.25), ('c', 0.5)]);
        let entries = sorted_entries(&probabilities);
        assert_eq!(
            entries.iter().map(|&(s, _)| s).collect::<Vec<_>>(),
            vec!['c', 'a', 'b']
        );
    }

    #[test]
    fn test_frequency_table_respects_top_limit() {
        let result = analyze("aaabbc").unwrap();
        let table = frequency_table(&result, Some(2));
        let rendered = table.to_string();
        assert!(rendered.contains("\u{2502} a"));
        assert!(rendered.contains("\u{2502} b"));
        assert!(!rendered.contains("\u{2502} c"));
    }

    #[test]
    fn test_category_panels_always_show_six() {
        let result = analyze("abc").unwrap();
        let panels = category_panels(&result);
        for title in ["Whitespace", "Digits", "Punctuation", "Cyrillic", "Latin", "Other"] {
            assert!(panels.contains(title), "missing panel: {title}");
        }
        assert!(panels.contains("(none)"));
    }
}
