//! Lenient number parsing and display
//!
//! Source datasets carry every numeric value as text, and not all of it is
//! well formed. Parsing takes the longest leading decimal literal and yields
//! NaN when there is none; display prints the shortest string that round-trips
//! back to the same value, switching to exponent notation outside the
//! `[1e-6, 1e21)` magnitude range.

/// Parse the longest leading decimal literal of `s`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fractional part, an optional exponent, or the word `Infinity`.
/// Trailing garbage is ignored (`"0.8abc"` parses as `0.8`). Returns NaN when
/// no literal can be read.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A lone "." only counts when digits precede it
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a number as its shortest round-trip decimal string
///
/// `NaN` and the infinities are spelled out; negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    value.to_string()
}

/// Format a fraction as a percentage string, e.g. `0.8` -> `"80 %"`
///
/// NaN is kept visible as `"NaN %"`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{} %", format_number(fraction * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("0.8"), 0.8);
        assert_eq!(parse_float("50"), 50.0);
        assert_eq!(parse_float("-12.5"), -12.5);
        assert_eq!(parse_float("+3"), 3.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
    }

    #[test]
    fn test_parse_lenient_prefix() {
        assert_eq!(parse_float("  0.75"), 0.75);
        assert_eq!(parse_float("0.8abc"), 0.8);
        assert_eq!(parse_float("12,5"), 12.0);
        assert_eq!(parse_float("3e"), 3.0);
        assert_eq!(parse_float("3e+"), 3.0);
        assert_eq!(parse_float("7.1.2"), 7.1);
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(parse_float("x").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("abc1").is_nan());
        assert!(parse_float("e5").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.07 * 100.0), "7.000000000000001");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.5), "50 %");
        assert_eq!(format_percentage(0.8), "80 %");
        assert_eq!(format_percentage(1.0), "100 %");
        assert_eq!(format_percentage(f64::NAN), "NaN %");
    }
}
