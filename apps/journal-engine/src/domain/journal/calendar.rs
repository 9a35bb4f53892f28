//! Month view backing the journal calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Trade;
use crate::domain::shared::math::saturating_sum;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Calendar day.
    pub date: NaiveDate,
    /// Net P&L, `None` when nothing was traded that day.
    pub pl: Option<Decimal>,
    /// Number of trades booked on the day.
    pub trade_count: u32,
}

/// All days of one month with their net P&L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Weekday of the 1st, used to offset the grid.
    pub first_weekday: Weekday,
    /// One entry per day of the month, in order.
    pub days: Vec<CalendarDay>,
    /// Net P&L of the whole month.
    pub month_total: Decimal,
    /// Days in the month with at least one trade.
    pub trading_days: u32,
}

/// Build the calendar for `year`/`month`. Returns `None` for an invalid month.
pub fn month_calendar(trades: &[Trade], year: i32, month: u32) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let length = days_in_month(first)?;

    let mut days: Vec<CalendarDay> = first
        .iter_days()
        .take(length as usize)
        .map(|date| CalendarDay {
            date,
            pl: None,
            trade_count: 0,
        })
        .collect();

    for trade in trades {
        if trade.date.year() != year || trade.date.month() != month {
            continue;
        }
        let cell = &mut days[trade.date.day0() as usize];
        cell.pl = Some(cell.pl.unwrap_or(Decimal::ZERO).saturating_add(trade.pl));
        cell.trade_count += 1;
    }

    let month_total = saturating_sum(days.iter().filter_map(|d| d.pl));
    let trading_days = days.iter().filter(|d| d.trade_count > 0).count() as u32;

    Some(MonthCalendar {
        year,
        month,
        first_weekday: first.weekday(),
        days,
        month_total,
        trading_days,
    })
}

/// First and last day of `year`/`month`, or `None` if the month is invalid.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let length = days_in_month(first)?;
    let last = first.checked_add_days(Days::new(u64::from(length) - 1))?;
    Some((first, last))
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
