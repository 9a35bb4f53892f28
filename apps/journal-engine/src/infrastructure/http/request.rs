//! HTTP path parameters.
//!
//! JSON bodies reuse the application DTOs (`RecordTradeDto` and the
//! calculator forms).

use serde::{Deserialize, Serialize};

use crate::domain::journal::UserId;

/// `/api/v1/users/{user_id}/...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPath {
    /// Journal owner.
    pub user_id: String,
}

impl UserPath {
    /// Owner as a domain id.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::new(self.user_id.as_str())
    }
}

/// `/api/v1/users/{user_id}/calendar/{year}/{month}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarPath {
    /// Journal owner.
    pub user_id: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}
