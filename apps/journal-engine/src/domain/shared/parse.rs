//! Lenient parsing of user-entered form values.
//!
//! Calculator forms submit raw strings. Anything that does not parse as a
//! finite number becomes zero, and percentage fields are entered as whole
//! numbers ("55" means 55%).

use std::str::FromStr;

use rust_decimal::Decimal;

use super::constants::HUNDRED;

/// Parse a float, falling back to `0.0` for invalid or non-finite input.
pub fn parse_f64(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a whole-number percentage into a fraction (`"55"` -> `0.55`).
pub fn parse_percent(raw: &str) -> f64 {
    parse_f64(raw) / 100.0
}

/// Parse a non-negative count, truncating any fractional part.
pub fn parse_count(raw: &str) -> u32 {
    let value = parse_f64(raw).trunc();
    if value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

/// Parse a decimal amount, falling back to zero.
pub fn parse_decimal(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a whole-number percentage into a decimal fraction.
pub fn parse_decimal_percent(raw: &str) -> Decimal {
    parse_decimal(raw) / HUNDRED
}
