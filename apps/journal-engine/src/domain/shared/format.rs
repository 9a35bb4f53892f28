//! Formatting utilities for calculator display values.

use rust_decimal::Decimal;

/// Format a percentage value that is already scaled to 0-100.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", value)
}

/// Format a decimal with 2 decimal places.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Format an optional reward:risk ratio as `1:x`.
#[must_use]
pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("1:{v:.2}"))
}
