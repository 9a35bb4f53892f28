//! Trading journal: trades, day aggregation, statistics and the month
//! calendar.

mod aggregator;
mod calendar;
mod errors;
mod repository;
mod types;

pub use aggregator::{
    aggregate_by_day, best_day, daily_aggregates, journal_stats, total_pl, trades_to_csv,
    win_rate, worst_day,
};
pub use calendar::{CalendarDay, MonthCalendar, month_bounds, month_calendar};
pub use errors::JournalError;
pub use repository::TradeRepository;
pub use types::{DailyAggregate, DayOutcome, JournalStats, Trade, TradeId, UserId};
