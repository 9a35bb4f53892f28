//! Percentage-of-capital risk sizing.
//!
//! # Example
//!
//! ```rust
//! use journal_engine::domain::risk::{RiskSizingInput, size_risk};
//! use rust_decimal_macros::dec;
//!
//! let sizing = size_risk(&RiskSizingInput {
//!     portfolio_value: dec!(100000),
//!     daily_risk_pct: dec!(0.02),
//!     trade_risk_pct: dec!(0.005),
//!     trades_per_day: 4,
//! });
//! assert_eq!(sizing.risk_per_trade, dec!(500));
//! assert_eq!(sizing.max_daily_loss, dec!(2000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::math::saturating_div;

/// Input parameters for risk sizing. Percentages are fractions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSizingInput {
    /// Account value the percentages apply to.
    pub portfolio_value: Decimal,
    /// Maximum loss allowed per day.
    pub daily_risk_pct: Decimal,
    /// Maximum loss allowed per trade.
    pub trade_risk_pct: Decimal,
    /// Planned number of trades per day.
    pub trades_per_day: u32,
}

/// Result of risk sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSizing {
    /// `portfolio_value * trade_risk_pct`.
    pub risk_per_trade: Decimal,
    /// `portfolio_value * daily_risk_pct`.
    pub max_daily_loss: Decimal,
    /// Daily budget spread over the planned trades; zero when no trades are planned.
    pub daily_risk_per_trade: Decimal,
}

/// Size the per-trade and per-day risk budget.
///
/// Products saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn size_risk(input: &RiskSizingInput) -> RiskSizing {
    let risk_per_trade = input.portfolio_value.saturating_mul(input.trade_risk_pct);
    let max_daily_loss = input.portfolio_value.saturating_mul(input.daily_risk_pct);
    let daily_risk_per_trade =
        saturating_div(max_daily_loss, Decimal::from(input.trades_per_day));

    RiskSizing {
        risk_per_trade,
        max_daily_loss,
        daily_risk_per_trade,
    }
}
