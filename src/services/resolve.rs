//! Per-field fallback between employee and external data
//!
//! Every numeric field is looked up on the employee sub-record first and on
//! the external sub-record second. A value that is absent or empty falls
//! through; when both sources are exhausted the sentinel is used instead.

use crate::models::parse_float;

/// Placeholder for "no data"; it never parses as a number
pub const SENTINEL: &str = "x";

/// Treat an empty string the same as an absent value
fn usable(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pick the first usable text value, or the sentinel
pub fn resolve_text<'a>(
    primary: Option<&'a str>,
    secondary: Option<&'a str>,
    sentinel: &'a str,
) -> &'a str {
    usable(primary).or(usable(secondary)).unwrap_or(sentinel)
}

/// Pick the first usable value and parse it as a number
///
/// Unparseable input, the sentinel included, yields NaN.
///
/// # Examples
/// ```
/// use utilisation::services::resolve::{resolve_numeric, SENTINEL};
///
/// assert_eq!(resolve_numeric(Some("0.5"), Some("0.9"), SENTINEL), 0.5);
/// assert_eq!(resolve_numeric(None, Some("0.9"), SENTINEL), 0.9);
/// assert!(resolve_numeric(None, None, SENTINEL).is_nan());
/// ```
pub fn resolve_numeric(primary: Option<&str>, secondary: Option<&str>, sentinel: &str) -> f64 {
    parse_float(resolve_text(primary, secondary, sentinel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_wins() {
        assert_eq!(resolve_text(Some("a"), Some("b"), SENTINEL), "a");
        assert_eq!(resolve_numeric(Some("0.5"), Some("0.9"), SENTINEL), 0.5);
    }

    #[test]
    fn test_falls_back_to_secondary() {
        assert_eq!(resolve_text(None, Some("b"), SENTINEL), "b");
        assert_eq!(resolve_numeric(Some(""), Some("0.9"), SENTINEL), 0.9);
    }

    #[test]
    fn test_sentinel_when_both_missing() {
        assert_eq!(resolve_text(None, None, SENTINEL), "x");
        assert_eq!(resolve_text(Some(""), Some(""), SENTINEL), "x");
        assert!(resolve_numeric(None, None, SENTINEL).is_nan());
    }

    #[test]
    fn test_malformed_primary_does_not_fall_through() {
        // Only missing values fall back; present garbage parses to NaN
        assert!(resolve_numeric(Some("n/a"), Some("0.9"), SENTINEL).is_nan());
    }

    #[test]
    fn test_custom_sentinel() {
        assert_eq!(resolve_numeric(None, None, "0"), 0.0);
    }
}
