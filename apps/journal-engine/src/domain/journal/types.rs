//! Core types for the trading journal.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the journal owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a user identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique trade identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(String);

impl TradeId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A journal trade: one signed P&L figure booked on a calendar day.
///
/// Trades are immutable once recorded. Several trades may share a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade identifier.
    pub id: TradeId,
    /// Owner of the journal entry.
    pub user_id: UserId,
    /// Calendar day the trade is booked on.
    pub date: NaiveDate,
    /// Signed profit or loss.
    pub pl: Decimal,
}

impl Trade {
    /// Create a trade with a freshly generated id.
    #[must_use]
    pub fn new(user_id: UserId, date: NaiveDate, pl: Decimal) -> Self {
        Self {
            id: TradeId::generate(),
            user_id,
            date,
            pl,
        }
    }
}

/// Net P&L of one calendar day. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Calendar day.
    pub date: NaiveDate,
    /// Sum of every trade booked on the day.
    pub total_pl: Decimal,
}

impl DailyAggregate {
    /// Outcome class of the day.
    #[must_use]
    pub fn outcome(&self) -> DayOutcome {
        match self.total_pl.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => DayOutcome::Profit,
            std::cmp::Ordering::Less => DayOutcome::Loss,
            std::cmp::Ordering::Equal => DayOutcome::Flat,
        }
    }
}

/// Classification of a trading day by its net P&L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOutcome {
    /// Net P&L above zero.
    Profit,
    /// Net P&L below zero.
    Loss,
    /// Net P&L exactly zero; counts as neither win nor loss.
    Flat,
}

/// Summary statistics for a set of journal trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalStats {
    /// Sum of all trade P&L.
    pub total_pl: Decimal,
    /// Number of trades.
    pub trade_count: u64,
    /// Number of distinct days with at least one trade.
    pub trading_days: u64,
    /// Days with positive net P&L.
    pub profit_days: u64,
    /// Days with negative net P&L.
    pub loss_days: u64,
    /// Days with exactly zero net P&L.
    pub flat_days: u64,
    /// Profit days / trading days x 100.
    pub win_rate: Decimal,
    /// Best day, if any trades exist.
    pub best_day: Option<DailyAggregate>,
    /// Worst day, if any trades exist.
    pub worst_day: Option<DailyAggregate>,
    /// Mean net P&L per trading day.
    pub avg_daily_pl: Decimal,
}

impl Default for JournalStats {
    fn default() -> Self {
        Self {
            total_pl: Decimal::ZERO,
            trade_count: 0,
            trading_days: 0,
            profit_days: 0,
            loss_days: 0,
            flat_days: 0,
            win_rate: Decimal::ZERO,
            best_day: None,
            worst_day: None,
            avg_daily_pl: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
            panic!("valid test date");
        };
        date
    }

    #[test]
    fn test_new_trade_keeps_fields() {
        let trade = Trade::new(UserId::new("u1"), day(2025, 1, 2), dec!(-10));
        assert_eq!(trade.user_id.as_str(), "u1");
        assert_eq!(trade.date, day(2025, 1, 2));
        assert_eq!(trade.pl, dec!(-10));
        assert!(!trade.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(TradeId::generate(), TradeId::generate());
    }

    #[test]
    fn test_day_outcome() {
        let date = day(2025, 1, 3);
        let profit = DailyAggregate { date, total_pl: dec!(1) };
        let loss = DailyAggregate { date, total_pl: dec!(-1) };
        let flat = DailyAggregate { date, total_pl: dec!(0) };
        assert_eq!(profit.outcome(), DayOutcome::Profit);
        assert_eq!(loss.outcome(), DayOutcome::Loss);
        assert_eq!(flat.outcome(), DayOutcome::Flat);
    }

    #[test]
    fn test_trade_serde_shape() {
        let trade = Trade {
            id: TradeId::new("t-1"),
            user_id: UserId::new("u-1"),
            date: day(2025, 1, 2),
            pl: dec!(-40.5),
        };
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["id"], "t-1");
        assert_eq!(json["user_id"], "u-1");
        assert_eq!(json["date"], "2025-01-02");
        assert_eq!(json["pl"], "-40.5");
    }
}
