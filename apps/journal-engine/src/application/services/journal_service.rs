//! Journal Service
//!
//! Loads a user's trades through the repository and hands them to the pure
//! journal calculators.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::RecordTradeDto;
use crate::domain::journal::{
    JournalError, JournalStats, MonthCalendar, Trade, TradeRepository, UserId, journal_stats,
    month_bounds, month_calendar, trades_to_csv,
};

/// Journal queries and commands for one repository.
pub struct JournalService<R: TradeRepository> {
    repo: Arc<R>,
}

impl<R: TradeRepository> Clone for JournalService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: TradeRepository> JournalService<R> {
    /// Create a new service.
    pub const fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and store a trade.
    ///
    /// # Errors
    ///
    /// Returns `MissingUser`/`InvalidDate` for bad input, `Storage` if the
    /// repository fails.
    pub async fn record_trade(&self, request: RecordTradeDto) -> Result<Trade, JournalError> {
        let trade = request.into_trade()?;
        self.repo.save(&trade).await?;
        let user_trades = self.repo.count_for_user(&trade.user_id).await?;
        info!(
            user_id = %trade.user_id,
            trade_id = trade.id.as_str(),
            date = %trade.date,
            pl = %trade.pl,
            user_trades,
            "Trade recorded"
        );
        Ok(trade)
    }

    /// All trades of a user.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the repository fails.
    pub async fn trades_for(&self, user_id: &UserId) -> Result<Vec<Trade>, JournalError> {
        self.repo.find_by_user(user_id).await
    }

    /// Statistics over every trade of a user.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the repository fails.
    pub async fn stats_for(&self, user_id: &UserId) -> Result<JournalStats, JournalError> {
        let trades = self.repo.find_by_user(user_id).await?;
        let stats = journal_stats(&trades);
        debug!(
            user_id = %user_id,
            trades = stats.trade_count,
            days = stats.trading_days,
            "Journal stats computed"
        );
        Ok(stats)
    }

    /// Month calendar for a user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if the month does not exist, `Storage` if the
    /// repository fails.
    pub async fn calendar_for(
        &self,
        user_id: &UserId,
        year: i32,
        month: u32,
    ) -> Result<MonthCalendar, JournalError> {
        let invalid = || JournalError::InvalidMonth { year, month };
        let (first, last) = month_bounds(year, month).ok_or_else(invalid)?;
        let trades = self.repo.find_by_user_between(user_id, first, last).await?;
        month_calendar(&trades, year, month).ok_or_else(invalid)
    }

    /// CSV export of a user's trades, sorted by date.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the repository fails.
    pub async fn export_csv(&self, user_id: &UserId) -> Result<String, JournalError> {
        let trades = self.repo.find_by_user(user_id).await?;
        Ok(trades_to_csv(&trades))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryTradeRepository;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> JournalService<InMemoryTradeRepository> {
        JournalService::new(Arc::new(InMemoryTradeRepository::new()))
    }

    fn request(user: &str, date: &str, pl: Decimal) -> RecordTradeDto {
        RecordTradeDto {
            user_id: user.to_string(),
            date: date.to_string(),
            pl,
        }
    }

    #[tokio::test]
    async fn test_record_and_stats() {
        let service = service();
        service
            .record_trade(request("alice", "2025-01-02", dec!(100)))
            .await
            .unwrap();
        service
            .record_trade(request("alice", "2025-01-02", dec!(-40)))
            .await
            .unwrap();
        service
            .record_trade(request("alice", "2025-01-03", dec!(50)))
            .await
            .unwrap();

        let stats = service.stats_for(&UserId::new("alice")).await.unwrap();
        assert_eq!(stats.total_pl, dec!(110));
        assert_eq!(stats.trading_days, 2);
        assert_eq!(stats.win_rate, dec!(100));
    }

    #[tokio::test]
    async fn test_invalid_trade_is_not_stored() {
        let service = service();
        let err = service
            .record_trade(request("alice", "yesterday", dec!(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidDate { .. }));
        assert!(service.trades_for(&UserId::new("alice")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_calendar_only_includes_month() {
        let service = service();
        for (date, pl) in [("2025-01-31", dec!(10)), ("2025-02-01", dec!(20))] {
            service
                .record_trade(request("alice", date, pl))
                .await
                .unwrap();
        }

        let calendar = service
            .calendar_for(&UserId::new("alice"), 2025, 2)
            .await
            .unwrap();
        assert_eq!(calendar.month_total, dec!(20));
        assert_eq!(calendar.days.len(), 28);
    }

    #[tokio::test]
    async fn test_calendar_rejects_invalid_month() {
        let err = service()
            .calendar_for(&UserId::new("alice"), 2025, 13)
            .await
            .unwrap_err();
        assert_eq!(err, JournalError::InvalidMonth { year: 2025, month: 13 });
    }

    #[tokio::test]
    async fn test_export_csv_sorted() {
        let service = service();
        service
            .record_trade(request("alice", "2025-01-03", dec!(50)))
            .await
            .unwrap();
        service
            .record_trade(request("alice", "2025-01-02", dec!(100)))
            .await
            .unwrap();

        let csv = service.export_csv(&UserId::new("alice")).await.unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,date,pl");
        assert!(lines[1].ends_with(",2025-01-02,100"));
        assert!(lines[2].ends_with(",2025-01-03,50"));
    }
}
