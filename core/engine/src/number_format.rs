//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Number formatting utilities for displaying line results.
//! CONTEXT: This module converts an evaluated Value into the string shown in
//! the result gutter. Formatting is deterministic and stateless.
//!
//! RULES:
//! - 0 renders as "0"
//! - |x| >= 1e9 or |x| < 1e-9: scientific, at most 7 significant digits
//! - safe integers: digits with thousands separators
//! - everything else: 15 significant digits (hides float noise such as
//!   0.30000000000000004), trailing zeros trimmed, thousands separators
//! - currency: exactly 2 decimals unless they are .00, `$` prefix
//! - percent, measures and temperatures: suffix after the number

use parser::{Unit, Value};

/// Magnitude at and above which numbers switch to scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e9;

/// Nonzero magnitudes below this switch to scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-9;

/// 2^53 - 1, the largest integer every f64 step can represent.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const SCIENTIFIC_DIGITS: usize = 7;
const CURRENCY_SCIENTIFIC_DIGITS: usize = 3;
const GENERAL_DIGITS: usize = 15;

/// Format a value with its unit for display.
pub fn format_value(value: &Value) -> String {
    let number = format_number(value.amount);

    match value.unit {
        Unit::None => number,
        Unit::Usd => format_currency(value.amount),
        Unit::Percent => format!("{}%", number),
        Unit::Temperature(temperature) => format!("{}{}", number, temperature.symbol()),
        Unit::Measure(measure) => format!("{} {}", number, measure.symbol()),
    }
}

/// Format a plain number (auto-detect best representation).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_value = value.abs();

    if !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&abs_value) {
        return format_scientific(value, SCIENTIFIC_DIGITS);
    }

    // Integers don't show a decimal point
    if value.fract() == 0.0 && abs_value <= MAX_SAFE_INTEGER {
        return add_thousands_separator(&format!("{:.0}", value));
    }

    add_thousands_separator(&trim_fraction(&to_precision(value, GENERAL_DIGITS)))
}

/// Format a dollar amount: `$1,234.50`, `$12`, `-$3.25`, `$1.23e9`.
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();

    let body = if abs_value != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&abs_value) {
        format_scientific(abs_value, CURRENCY_SCIENTIFIC_DIGITS)
    } else {
        let fixed = format!("{:.2}", abs_value);
        let fixed = fixed.strip_suffix(".00").unwrap_or(&fixed);
        add_thousands_separator(fixed)
    };

    // -0.001 rounds to $0; don't show it as negative
    if value < 0.0 && body != "0" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Scientific notation with at most `significant` digits in the mantissa,
/// trailing mantissa zeros trimmed and no `+` in the exponent: `1.234568e12`.
fn format_scientific(value: f64, significant: usize) -> String {
    let formatted = format!("{:.prec$e}", value, prec = significant - 1);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{}", trim_fraction(mantissa), exponent),
        None => formatted,
    }
}

/// Fixed-point rendering rounded to `digits` significant digits.
fn to_precision(value: f64, digits: usize) -> String {
    let formatted = format!("{:.prec$e}", value, prec = digits - 1);

    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };

    let negative = mantissa.starts_with('-');
    let significant: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    // Number of digits in front of the decimal point
    let point = exponent + 1;
    let body = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), significant)
    } else if point as usize >= significant.len() {
        format!("{}{}", significant, "0".repeat(point as usize - significant.len()))
    } else {
        let (integer, fraction) = significant.split_at(point as usize);
        format!("{}.{}", integer, fraction)
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Drops trailing zeros after a decimal point, and the point itself if bare.
fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::{Length, Measure, Temperature};

    #[test]
    fn test_format_number_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(12_345_678.0), "12,345,678");
        assert_eq!(format_number(-1_000.0), "-1,000");
    }

    #[test]
    fn test_format_number_hides_float_noise() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(3.14159), "3.14159");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.000_001_5), "0.0000015");
    }

    #[test]
    fn test_format_number_scientific() {
        assert_eq!(format_number(1_234_567_890_123.0), "1.234568e12");
        assert_eq!(format_number(1e9), "1e9");
        assert_eq!(format_number(-2.5e10), "-2.5e10");
        assert_eq!(format_number(1.5e-10), "1.5e-10");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3.0), "$3");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.1 + 0.2), "$0.30");
        assert_eq!(format_currency(-3.25), "-$3.25");
        assert_eq!(format_currency(-0.001), "$0");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1_234_567_890.0), "$1.23e9");
    }

    #[test]
    fn test_format_value_suffixes() {
        assert_eq!(format_value(&Value::new(15.0, Unit::Percent)), "15%");
        assert_eq!(
            format_value(&Value::new(21.5, Unit::Temperature(Temperature::Celsius))),
            "21.5°C"
        );
        assert_eq!(
            format_value(&Value::new(
                2.0,
                Unit::Measure(Measure::Length {
                    base: Length::Meter,
                    power: 2
                })
            )),
            "2 m^2"
        );
        assert_eq!(format_value(&Value::usd(12.0)), "$12");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(add_thousands_separator("1234567"), "1,234,567");
        assert_eq!(add_thousands_separator("123"), "123");
        assert_eq!(add_thousands_separator("-1234.56"), "-1,234.56");
    }

    #[test]
    fn test_to_precision() {
        assert_eq!(to_precision(0.30000000000000004, 15), "0.300000000000000");
        assert_eq!(to_precision(123.456, 5), "123.46");
        assert_eq!(to_precision(-0.0123, 3), "-0.0123");
    }
}
