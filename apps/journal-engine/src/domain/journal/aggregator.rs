//! Day-level aggregation and journal statistics.
//!
//! Trades are grouped by their exact calendar date. Several trades on the
//! same date add up; a day whose net P&L is exactly zero is neither a win
//! nor a loss.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{DailyAggregate, DayOutcome, JournalStats, Trade};
use crate::domain::shared::constants::HUNDRED;
use crate::domain::shared::math::{mean, saturating_sum};

/// Sum trade P&L per calendar day, ordered by date.
///
/// Day totals saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn aggregate_by_day(trades: &[Trade]) -> BTreeMap<NaiveDate, Decimal> {
    let mut days = BTreeMap::new();
    for trade in trades {
        let total = days.entry(trade.date).or_insert(Decimal::ZERO);
        *total = total.saturating_add(trade.pl);
    }
    days
}

/// Day aggregates as a date-ordered list.
pub fn daily_aggregates(trades: &[Trade]) -> Vec<DailyAggregate> {
    aggregate_by_day(trades)
        .into_iter()
        .map(|(date, total_pl)| DailyAggregate { date, total_pl })
        .collect()
}

/// Sum of every individual trade P&L, saturating on overflow.
pub fn total_pl(trades: &[Trade]) -> Decimal {
    saturating_sum(trades.iter().map(|t| t.pl))
}

/// Percentage (0-100) of trading days that closed with positive net P&L.
///
/// Returns zero when there are no trades.
pub fn win_rate(trades: &[Trade]) -> Decimal {
    win_rate_of(&daily_aggregates(trades))
}

/// Day with the highest net P&L.
pub fn best_day(trades: &[Trade]) -> Option<DailyAggregate> {
    daily_aggregates(trades)
        .into_iter()
        .max_by(|a, b| a.total_pl.cmp(&b.total_pl))
}

/// Day with the lowest net P&L.
pub fn worst_day(trades: &[Trade]) -> Option<DailyAggregate> {
    daily_aggregates(trades)
        .into_iter()
        .min_by(|a, b| a.total_pl.cmp(&b.total_pl))
}

fn win_rate_of(days: &[DailyAggregate]) -> Decimal {
    if days.is_empty() {
        return Decimal::ZERO;
    }
    let profit_days = days
        .iter()
        .filter(|d| d.outcome() == DayOutcome::Profit)
        .count();
    Decimal::from(profit_days as u64) / Decimal::from(days.len() as u64) * HUNDRED
}

/// Compute the full statistics block shown above the journal calendar.
pub fn journal_stats(trades: &[Trade]) -> JournalStats {
    if trades.is_empty() {
        return JournalStats::default();
    }

    let days = daily_aggregates(trades);

    let mut profit_days = 0u64;
    let mut loss_days = 0u64;
    let mut flat_days = 0u64;
    for day in &days {
        match day.outcome() {
            DayOutcome::Profit => profit_days += 1,
            DayOutcome::Loss => loss_days += 1,
            DayOutcome::Flat => flat_days += 1,
        }
    }

    let day_totals: Vec<Decimal> = days.iter().map(|d| d.total_pl).collect();

    JournalStats {
        total_pl: total_pl(trades),
        trade_count: trades.len() as u64,
        trading_days: days.len() as u64,
        profit_days,
        loss_days,
        flat_days,
        win_rate: win_rate_of(&days),
        best_day: days.iter().copied().max_by(|a, b| a.total_pl.cmp(&b.total_pl)),
        worst_day: days.iter().copied().min_by(|a, b| a.total_pl.cmp(&b.total_pl)),
        avg_daily_pl: mean(&day_totals).unwrap_or(Decimal::ZERO),
    }
}

/// Export trades to CSV, sorted by date.
#[must_use]
pub fn trades_to_csv(trades: &[Trade]) -> String {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut csv = String::from("id,date,pl\n");
    for trade in sorted {
        let _ = writeln!(csv, "{},{},{}", trade.id.as_str(), trade.date, trade.pl);
    }
    csv
}
