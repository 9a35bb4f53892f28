//! Journal domain errors.

use thiserror::Error;

/// Errors raised while recording or loading journal trades.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// The trade date could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid trade date '{value}'")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A user id was missing or blank.
    #[error("User id must not be empty")]
    MissingUser,

    /// Requested calendar month does not exist.
    #[error("Invalid calendar month {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },

    /// The backing store failed.
    #[error("Trade storage failure: {0}")]
    Storage(String),
}
