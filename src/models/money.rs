//! Money type for representing euro amounts
//!
//! Amounts are rounded to cents from their shortest decimal form, digit by
//! digit, so neither binary float error nor an integer cent range limits what
//! can be shown. Formatting follows German conventions: `.` groups thousands,
//! `,` separates the two fraction digits, and the euro sign trails after a
//! non-breaking space.

use std::fmt;

/// Separator between the amount and the euro sign
pub const EURO_SEPARATOR: char = '\u{a0}';

/// A finite euro amount rounded to whole cents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    negative: bool,
    /// Whole euro digits, without leading zeros
    euros: String,
    cents: u8,
}

impl Money {
    /// Round a floating-point euro value to cents
    ///
    /// The shortest decimal that round-trips to `amount` is rounded half away
    /// from zero, so `1.005` becomes `1,01 €`. The sign follows the sign bit:
    /// `-0.0` and tiny negative values stay negative. Returns `None` for NaN
    /// and the infinities.
    ///
    /// # Examples
    /// ```
    /// use utilisation::models::Money;
    /// let amount = Money::from_euros(6400.0).unwrap();
    /// assert_eq!(amount.to_string(), "6.400,00\u{a0}€");
    /// ```
    pub fn from_euros(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        // f64 Display never switches to exponent notation
        let decimal = amount.abs().to_string();
        let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));

        let mut digits: Vec<u8> = whole
            .bytes()
            .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
            .map(|b| b - b'0')
            .collect();

        if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
            round_up(&mut digits);
        }

        let split = digits.len() - 2;
        let cents = digits[split] * 10 + digits[split + 1];
        let euros: String = digits[..split]
            .iter()
            .map(|&d| char::from(b'0' + d))
            .skip_while(|&c| c == '0')
            .collect();

        Some(Self {
            negative: amount.is_sign_negative(),
            euros: if euros.is_empty() { "0".to_string() } else { euros },
            cents,
        })
    }

    /// Check if the amount carries a minus sign
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{},{:02}{}€",
            sign,
            group_thousands(&self.euros),
            self.cents,
            EURO_SEPARATOR
        )
    }
}

/// Format a euro amount given as a float
///
/// Finite values go through [`Money`]; infinities print as `∞` and NaN as
/// `NaN`.
pub fn format_euros(amount: f64) -> String {
    match Money::from_euros(amount) {
        Some(money) => money.to_string(),
        None if amount.is_nan() => format!("NaN{}€", EURO_SEPARATOR),
        None => {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{}∞{}€", sign, EURO_SEPARATOR)
        }
    }
}

/// Add one unit in the last place of a decimal digit sequence
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Insert `.` between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
