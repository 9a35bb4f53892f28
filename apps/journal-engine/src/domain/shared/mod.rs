//! Helpers shared by every calculator: constants, float/decimal math,
//! display formatting and lenient form parsing.

pub mod constants;
pub mod format;
pub mod math;
pub mod parse;

pub use format::{format_decimal, format_pct, format_ratio};
pub use parse::{parse_count, parse_decimal, parse_decimal_percent, parse_f64, parse_percent};
