//! Lenient numeric parsing for raw form field text.
//!
//! Form fields hand over whatever the user typed. These helpers read the
//! leading number out of that text the way the browser's `parseFloat` and
//! `parseInt` do, so `"12 h"` reads as `12` and `"abc"` reads as nothing.

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for leading-number extraction
static FLOAT_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap());
static INFINITY_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-]?)Infinity").unwrap());
static INT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

/// Read the longest leading decimal literal from `input`.
///
/// Leading whitespace is skipped and trailing garbage is ignored. Returns
/// `None` when the text does not start with a number.
///
/// # Examples
/// ```
/// use steady_check::utils::parse_float_prefix;
/// assert_eq!(parse_float_prefix("  12.5 hours"), Some(12.5));
/// assert_eq!(parse_float_prefix("1e2"), Some(100.0));
/// assert_eq!(parse_float_prefix("abc"), None);
/// ```
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();

    if let Some(captures) = INFINITY_PREFIX_REGEX.captures(trimmed) {
        return Some(if &captures[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    FLOAT_PREFIX_REGEX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Read the leading base-10 integer from `input`, ignoring anything after it.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    INT_PREFIX_REGEX
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefix_stops_at_first_non_numeric_char() {
        assert_eq!(parse_float_prefix("48"), Some(48.0));
        assert_eq!(parse_float_prefix("12 h"), Some(12.0));
        assert_eq!(parse_float_prefix("3.5.1"), Some(3.5));
        assert_eq!(parse_float_prefix("\t-5"), Some(-5.0));
        assert_eq!(parse_float_prefix(".25"), Some(0.25));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
    }

    #[test]
    fn float_prefix_only_consumes_complete_exponents() {
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("2E-1x"), Some(0.2));
    }

    #[test]
    fn float_prefix_rejects_text_without_a_leading_number() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("   "), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("h12"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix("inf"), None);
    }

    #[test]
    fn float_prefix_reads_spelled_out_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinityx"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn prefixes_stop_at_non_ascii_digits() {
        assert_eq!(parse_float_prefix("12\u{0661}"), Some(12.0));
        assert_eq!(parse_float_prefix("\u{0661}2"), None);
        assert_eq!(parse_int_prefix("97\u{0669}"), Some(97));
    }

    #[test]
    fn int_prefix_drops_fraction() {
        assert_eq!(parse_int_prefix("97"), Some(97));
        assert_eq!(parse_int_prefix(" 95.5"), Some(95));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("%90"), None);
    }
}
