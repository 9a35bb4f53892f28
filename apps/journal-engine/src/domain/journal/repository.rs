//! Trade Repository Trait
//!
//! Defines the persistence abstraction for journal trades.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::errors::JournalError;
use super::types::{Trade, UserId};

/// Repository trait for trade persistence.
///
/// Trades are append-only: there is no update or delete.
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Store a new trade.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, trade: &Trade) -> Result<(), JournalError>;

    /// All trades owned by a user, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Trade>, JournalError>;

    /// Trades owned by a user with `from <= date <= to`.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user_between(
        &self,
        user_id: &UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Trade>, JournalError>;

    /// Number of trades owned by a user.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn count_for_user(&self, user_id: &UserId) -> Result<usize, JournalError>;
}
