//! Option-returning capture helpers shared by every extractor.
//!
//! The contract throughout the engine: a pattern that does not match
//! yields `None`, and callers coerce to the field's zero value with
//! `unwrap_or_default`. No extractor ever errors on text shape.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref MONEY_JUNK: Regex = Regex::new(r"[^0-9.]").unwrap();
}

/// First match of capture group `group`, trimmed.
pub fn cap(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(group))
        .map(|m| m.as_str().trim().to_string())
}

/// First match of capture group 1, trimmed.
pub fn cap1(re: &Regex, text: &str) -> Option<String> {
    cap(re, text, 1)
}

/// Whole first match, trimmed.
pub fn find(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().trim().to_string())
}

/// All whole matches, in source order.
pub fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Lenient `MM/DD/YYYY` parse; anything unparseable is `None`.
pub fn date_mdy(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y").ok()
}

/// Parse a dollar figure, tolerating `$` and stray whitespace.
pub fn money(s: &str) -> Option<f64> {
    MONEY_JUNK.replace_all(s, "").parse::<f64>().ok()
}

/// Collapse whitespace runs to single spaces and trim.
pub fn squeeze_ws(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Character-based substring from `start`, safe on short input.
pub fn slice_from(s: &str, start: usize) -> String {
    s.chars().skip(start).collect()
}

/// Character-based substring `[start, start+len)`, safe on short input.
pub fn slice_range(s: &str, start: usize, len: usize) -> String {
    s.chars().skip(start).take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cap_returns_none_on_no_match() {
        let re = Regex::new(r"Judge: ([A-Z]+)").unwrap();
        assert_eq!(cap1(&re, "no judge here"), None);
        assert_eq!(cap1(&re, "Judge: SMITH").as_deref(), Some("SMITH"));
    }

    #[test]
    fn date_mdy_handles_single_digit_parts() {
        assert_eq!(
            date_mdy("1/5/2020"),
            NaiveDate::from_ymd_opt(2020, 1, 5)
        );
        assert_eq!(date_mdy("13/45/2020"), None);
        assert_eq!(date_mdy("not a date"), None);
    }

    #[test]
    fn money_strips_currency_junk() {
        assert_eq!(money("$1,234.50"), Some(1234.50));
        assert_eq!(money(" $0.00"), Some(0.0));
        assert_eq!(money("L"), None);
    }

    #[test]
    fn slice_helpers_tolerate_short_strings() {
        assert_eq!(slice_from("abc", 10), "");
        assert_eq!(slice_range("abcdef", 1, 3), "bcd");
        assert_eq!(slice_range("ab", 1, 5), "b");
    }

    #[test]
    fn squeeze_ws_normalizes_runs() {
        assert_eq!(squeeze_ws("  a\n b\t\tc "), "a b c");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn squeeze_ws_is_idempotent(s in ".*") {
            let once = squeeze_ws(&s);
            prop_assert_eq!(squeeze_ws(&once), once);
        }

        #[test]
        fn date_mdy_never_panics(s in ".*") {
            let _ = date_mdy(&s);
        }

        #[test]
        fn money_never_panics(s in ".*") {
            let _ = money(&s);
        }

        #[test]
        fn slice_range_stays_within_input(s in ".*", start in 0usize..40, len in 0usize..40) {
            let out = slice_range(&s, start, len);
            prop_assert!(out.chars().count() <= len);
            prop_assert!(out.chars().count() <= s.chars().count());
        }
    }
}
