//! Decimal parsing and display formatting.
//!
//! Display values are rounded to [`DISPLAY_PRECISION`] significant digits
//! (half-up), stripped of trailing zeros, rendered in plain notation and
//! comma-grouped on the integer part. Text that is still being typed keeps
//! its trailing decimal point.

use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

use super::error::CalcError;

/// Literal shown on the display after an invalid computation.
pub const ERROR_SENTINEL: &str = "Error";

/// Significant digits kept on the display.
pub const DISPLAY_PRECISION: u64 = 10;

/// Fractional digits kept by every division.
pub const DIVISION_SCALE: i64 = 10;

pub fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

/// Parse calculator input: optional leading minus, ASCII digits and at most
/// one decimal point (which may be trailing).
pub fn parse_input(text: &str) -> Result<BigDecimal, CalcError> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let digits = unsigned.chars().filter(|c| c.is_ascii_digit()).count();
    let points = unsigned.chars().filter(|&c| c == '.').count();
    if digits == 0 || points > 1 || digits + points != unsigned.len() {
        return Err(CalcError::InvalidInput(text.to_string()));
    }
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    BigDecimal::from_str(trimmed).map_err(|_| CalcError::InvalidInput(text.to_string()))
}

/// Round to `digits` significant digits, half-up.
pub fn round_significant(value: &BigDecimal, digits: u64) -> BigDecimal {
    let precision = value.digits();
    if precision <= digits {
        return value.clone();
    }
    let (_, scale) = value.as_bigint_and_exponent();
    let excess = (precision - digits) as i64;
    value.with_scale_round(scale - excess, RoundingMode::HalfUp)
}

/// Render without exponent notation (`1E+3` becomes `1000`).
pub fn to_plain_string(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let raw = mantissa.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let body = if scale <= 0 {
        format!("{}{}", digits, "0".repeat(scale.unsigned_abs() as usize))
    } else {
        let scale = scale as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            format!("{}.{}", int_part, frac_part)
        } else {
            format!("0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    };
    format!("{}{}", sign, body)
}

/// Canonical display form of a computed value (no grouping).
pub fn format_decimal(value: &BigDecimal) -> String {
    let stripped = value.normalized();
    if stripped == zero() {
        return "0".to_string();
    }
    let rounded = round_significant(&stripped, DISPLAY_PRECISION).normalized();
    to_plain_string(&rounded)
}

/// Canonical display form of the current input text (no grouping).
///
/// Unparseable text is returned unchanged.
pub fn format_display(text: &str) -> String {
    if text == ERROR_SENTINEL {
        return text.to_string();
    }
    if let Some(head) = text.strip_suffix('.') {
        // "0." and "-0." stay exactly as typed
        return match parse_input(head) {
            Ok(value) if value != zero() => format!("{}.", format_decimal(&value)),
            _ => text.to_string(),
        };
    }
    parse_input(text)
        .map(|value| format_decimal(&value))
        .unwrap_or_else(|_| text.to_string())
}

/// Insert thousands separators into the integer part.
pub fn add_commas(text: &str) -> String {
    if text == ERROR_SENTINEL || text == "-" {
        return text.to_string();
    }
    let (integer, fraction) = match text.find('.') {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}{}", sign, grouped, fraction)
}

/// Full display pipeline: round, strip, group.
pub fn display_text(text: &str) -> String {
    add_commas(&format_display(text))
}
