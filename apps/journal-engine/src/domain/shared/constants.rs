//! Decimal constants shared by the journal calculators.

use rust_decimal::Decimal;

/// One hundred, for percentage scaling.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Share of the profit target a single day may represent (0.35).
pub const CONSISTENCY_THRESHOLD: Decimal = Decimal::from_parts(35, 0, 0, false, 2);

/// Histogram bin count used for simulation final capitals.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
