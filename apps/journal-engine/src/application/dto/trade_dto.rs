//! Trade DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::journal::{JournalError, Trade, UserId};

/// Request to record a journal trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTradeDto {
    /// Owner of the trade.
    pub user_id: String,
    /// Trade date, `YYYY-MM-DD`.
    pub date: String,
    /// Signed P&L.
    pub pl: Decimal,
}

impl RecordTradeDto {
    /// Validate the request and build a new trade.
    ///
    /// # Errors
    ///
    /// Returns `MissingUser` for a blank user id and `InvalidDate` when the
    /// date is not a calendar date.
    pub fn into_trade(self) -> Result<Trade, JournalError> {
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            return Err(JournalError::MissingUser);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| JournalError::InvalidDate { value: self.date.clone() })?;

        Ok(Trade::new(UserId::new(user_id), date, self.pl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dto(user_id: &str, date: &str) -> RecordTradeDto {
        RecordTradeDto {
            user_id: user_id.to_string(),
            date: date.to_string(),
            pl: dec!(-40.5),
        }
    }

    #[test]
    fn test_valid_trade() {
        let trade = dto(" alice ", "2025-01-02").into_trade().unwrap();
        assert_eq!(trade.user_id.as_str(), "alice");
        assert_eq!(trade.date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(trade.pl, dec!(-40.5));
    }

    #[test]
    fn test_blank_user_rejected() {
        assert_eq!(
            dto("  ", "2025-01-02").into_trade(),
            Err(JournalError::MissingUser)
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let Err(JournalError::InvalidDate { value }) = dto("alice", "2025-02-30").into_trade()
        else {
            panic!("expected invalid date");
        };
        assert_eq!(value, "2025-02-30");
    }
}
