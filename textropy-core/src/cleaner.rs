//! Denylist-based cleaning of raw text.
//!
//! A fixed set of special symbols is stripped from the input before any
//! counting takes place. Every other character, including all whitespace,
//! digits, letters of any script, and punctuation outside the denylist, is
//! left untouched and in its original order. Removal is silent: the caller
//! is not told which characters were dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character class matching the denylisted symbols:
/// `@ # $ ^ & * { } [ ] < > / \ | = +` and the backtick.
static DENYLIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[@#$^&*{}\[\]<>/\\|=+`]").expect("denylist character class must compile")
});

/// Removes every occurrence of the denylisted symbols from `raw`.
///
/// Pure and deterministic; idempotent, since the output contains no
/// denylisted character for a second pass to remove.
pub fn clean(raw: &str) -> String {
    DENYLIST.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_denylisted_symbols() {
        assert_eq!(clean("a@b#c"), "abc");
        assert_eq!(clean("x=y+z"), "xyz");
        assert_eq!(clean("<html>[ok]{no}|/\\`^&*$"), "htmlokno");
    }

    #[test]
    fn test_clean_preserves_everything_else() {
        let input = "Привет, world! 123\t\n.,!?;:\"'()-";
        assert_eq!(clean(input), input);
    }

    #[test]
    fn test_clean_preserves_order() {
        assert_eq!(clean("a<b>c=d"), "abcd");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = ["", "plain text", "a@b#c$d", "=+`|\\", "мир <и> труд"];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn test_clean_can_empty_the_input() {
        assert_eq!(clean("@#$^&*"), "");
    }
}
