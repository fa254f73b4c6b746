//! Lenient number parsing and formatting for script input/output.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("leading float pattern is valid")
});

/// Parses the longest numeric prefix of `input`, after leading whitespace.
///
/// `"5"`, `" 2.5lbs"`, `"-3e2"` and `"Infinity"` parse; `"abc"`, `""` and
/// `"."` do not.
#[must_use]
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let literal = LEADING_FLOAT.find(input.trim_start())?.as_str();
    literal.replacen("Infinity", "inf", 1).parse().ok()
}

/// Magnitude from which numbers print in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which non-zero numbers print in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Enough fractional digits to write any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats a number the way it was typed back to the user: shortest
/// round-trip digits, integers without a fractional part, infinities
/// spelled out, and exponent form (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return infinity(value);
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let scientific = format!("{value:e}");
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => scientific,
        };
    }
    format!("{value}")
}

/// Formats a number with a fixed count of decimals.
///
/// Rounds on the exact decimal value of the float, with ties going away
/// from zero: `0.125` gives `"0.13"`. Negative zero prints unsigned, and
/// magnitudes of `1e21` or more fall back to [`format_number`].
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return infinity(value);
    }
    if value == 0.0 {
        return format!("{:.decimals$}", 0.0);
    }
    if value.abs() >= EXPONENT_ABOVE {
        return format_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if fraction.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        round_up(&mut digits);
    }

    let point = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..point].iter().map(|&d| char::from(d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[point..].iter().map(|&d| char::from(d)));
    }
    out
}

/// Adds one unit in the last place to a string of ASCII digits.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn infinity(value: f64) -> String {
    if value.is_sign_negative() {
        "-Infinity".to_owned()
    } else {
        "Infinity".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_leading_float("5"), Some(5.0));
        assert_eq!(parse_leading_float("2.5"), Some(2.5));
        assert_eq!(parse_leading_float("-40"), Some(-40.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_takes_numeric_prefix() {
        assert_eq!(parse_leading_float("  12lbs"), Some(12.0));
        assert_eq!(parse_leading_float("3.5 kg"), Some(3.5));
        assert_eq!(parse_leading_float("7e"), Some(7.0));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("inf"), None);
    }

    #[test]
    fn test_format_number_drops_trailing_zero_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(98.6), "98.6");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_format_number_uses_exponent_outside_plain_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(35.0, 2), "35.00");
        assert_eq!(format_fixed(37.777_777, 1), "37.8");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_format_fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(1.125, 2), "1.13");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(9.995, 2), "9.99");
        assert_eq!(format_fixed(99.995_000_000_1, 2), "100.00");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_format_fixed_prints_negative_zero_unsigned() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.0, 1), "0.0");
    }

    #[test]
    fn test_format_fixed_keeps_sign_of_small_negatives() {
        assert_eq!(format_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_format_fixed_falls_back_to_exponent_for_huge_values() {
        assert_eq!(format_fixed(1e21, 2), "1e+21");
    }
}
