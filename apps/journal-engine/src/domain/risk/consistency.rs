//! Consistency target ("35% rule").
//!
//! Funded-account evaluations cap the share of the profit target a single
//! day may contribute. When the largest day exceeds the cap, the target is
//! raised until that day represents exactly the cap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::constants::{CONSISTENCY_THRESHOLD, HUNDRED};
use crate::domain::shared::math::saturating_div;

/// Input of the consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyInput {
    /// Current profit target.
    pub current_profit_target: Decimal,
    /// Largest single-day profit so far.
    pub largest_single_day: Decimal,
}

/// Result of the consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyCheck {
    /// Largest daily profit that keeps the rule satisfied for the current target.
    pub ideal_daily_profit: Decimal,
    /// Share of the target represented by the largest day, in percent.
    pub representation_pct: Decimal,
    /// Threshold used, in percent.
    pub limit_pct: Decimal,
    /// Whether the largest day breaks the rule.
    pub violated: bool,
    /// Target that satisfies the rule (unchanged when not violated).
    pub new_target: Decimal,
}

/// Check the largest day against the default 35% threshold.
pub fn check_consistency(input: &ConsistencyInput) -> ConsistencyCheck {
    check_consistency_with(input, CONSISTENCY_THRESHOLD)
}

/// Check the largest day against `threshold` (a fraction, e.g. `0.35`).
///
/// A non-positive target has no meaningful share and reports 0%, but any
/// profitable day still exceeds it, so the rule is flagged and the target
/// raised. Results saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn check_consistency_with(input: &ConsistencyInput, threshold: Decimal) -> ConsistencyCheck {
    let target = input.current_profit_target;
    let largest = input.largest_single_day;

    let ideal_daily_profit = target.saturating_mul(threshold);
    let limit_pct = threshold.saturating_mul(HUNDRED);
    let (representation_pct, violated) = if target > Decimal::ZERO {
        let pct = saturating_div(largest, target).saturating_mul(HUNDRED);
        (pct, pct > limit_pct)
    } else {
        (Decimal::ZERO, largest > Decimal::ZERO)
    };

    let new_target = if violated && threshold > Decimal::ZERO {
        saturating_div(largest, threshold)
    } else {
        target
    };

    ConsistencyCheck {
        ideal_daily_profit,
        representation_pct,
        limit_pct,
        violated,
        new_target,
    }
}
