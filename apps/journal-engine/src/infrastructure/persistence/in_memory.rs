//! In-memory trade repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::journal::{JournalError, Trade, TradeRepository, UserId};

/// In-memory implementation of `TradeRepository`.
///
/// Suitable for development and tests. Data is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryTradeRepository {
    trades: RwLock<HashMap<UserId, Vec<Trade>>>,
}

fn poisoned<T>(_: PoisonError<T>) -> JournalError {
    JournalError::Storage("trade store lock poisoned".to_string())
}

impl InMemoryTradeRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored trades across all users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades
            .read()
            .map(|trades| trades.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Whether no trades are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn save(&self, trade: &Trade) -> Result<(), JournalError> {
        let mut trades = self.trades.write().map_err(poisoned)?;
        trades
            .entry(trade.user_id.clone())
            .or_default()
            .push(trade.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Trade>, JournalError> {
        let trades = self.trades.read().map_err(poisoned)?;
        Ok(trades.get(user_id).cloned().unwrap_or_default())
    }

    async fn find_by_user_between(
        &self,
        user_id: &UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Trade>, JournalError> {
        let trades = self.trades.read().map_err(poisoned)?;
        Ok(trades
            .get(user_id)
            .map(|list| {
                list.iter()
                    .filter(|t| t.date >= from && t.date <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<usize, JournalError> {
        let trades = self.trades.read().map_err(poisoned)?;
        Ok(trades.get(user_id).map_or(0, Vec::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find_by_user() {
        let repo = InMemoryTradeRepository::new();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");

        repo.save(&Trade::new(alice.clone(), date(2025, 1, 2), dec!(100)))
            .await
            .unwrap();
        repo.save(&Trade::new(alice.clone(), date(2025, 1, 3), dec!(-40)))
            .await
            .unwrap();
        repo.save(&Trade::new(bob.clone(), date(2025, 1, 2), dec!(7)))
            .await
            .unwrap();

        let found = repo.find_by_user(&alice).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].pl, dec!(100));
        assert_eq!(repo.count_for_user(&bob).await.unwrap(), 1);
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_user_is_empty() {
        let repo = InMemoryTradeRepository::new();
        let nobody = UserId::new("nobody");
        assert!(repo.find_by_user(&nobody).await.unwrap().is_empty());
        assert_eq!(repo.count_for_user(&nobody).await.unwrap(), 0);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_find_between_is_inclusive() {
        let alice = UserId::new("alice");
        let repo = InMemoryTradeRepository::new();
        for (day, pl) in [
            (date(2025, 1, 31), dec!(1)),
            (date(2025, 2, 1), dec!(2)),
            (date(2025, 2, 28), dec!(3)),
            (date(2025, 3, 1), dec!(4)),
        ] {
            repo.save(&Trade::new(alice.clone(), day, pl)).await.unwrap();
        }

        let february = repo
            .find_by_user_between(&alice, date(2025, 2, 1), date(2025, 2, 28))
            .await
            .unwrap();
        let pls: Vec<_> = february.iter().map(|t| t.pl).collect();
        assert_eq!(pls, vec![dec!(2), dec!(3)]);
    }
}
