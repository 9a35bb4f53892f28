//! HTTP response DTOs.
//!
//! Calculator responses embed the raw result and add the display strings the
//! journal UI shows next to it.

use serde::{Deserialize, Serialize};

use crate::domain::expectancy::ExpectancySummary;
use crate::domain::journal::{JournalStats, Trade};
use crate::domain::risk::{ConsistencyCheck, RiskSizing};
use crate::domain::shared::{format_decimal, format_pct, format_ratio};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Trades of one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradesResponse {
    /// Journal owner.
    pub user_id: String,
    /// Number of trades.
    pub count: usize,
    /// Trades in insertion order.
    pub trades: Vec<Trade>,
}

/// Journal statistics with display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Raw statistics.
    #[serde(flatten)]
    pub stats: JournalStats,
    /// Win rate, e.g. `"66.67%"`.
    pub win_rate_display: String,
    /// Total P&L with two decimals.
    pub total_pl_display: String,
}

impl From<JournalStats> for StatsResponse {
    fn from(stats: JournalStats) -> Self {
        Self {
            win_rate_display: format_pct(stats.win_rate),
            total_pl_display: format_decimal(stats.total_pl),
            stats,
        }
    }
}

/// Expectancy projection with display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectancyResponse {
    /// Raw projection.
    #[serde(flatten)]
    pub summary: ExpectancySummary,
    /// Reward:risk ratio as `1:x`, or `N/A` when undefined.
    pub reward_risk_display: String,
}

impl From<ExpectancySummary> for ExpectancyResponse {
    fn from(summary: ExpectancySummary) -> Self {
        Self {
            reward_risk_display: format_ratio(summary.reward_risk_ratio),
            summary,
        }
    }
}

/// Risk sizing with display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResponse {
    /// Raw sizing.
    #[serde(flatten)]
    pub sizing: RiskSizing,
    /// Per-trade risk with two decimals.
    pub risk_per_trade_display: String,
    /// Daily loss limit with two decimals.
    pub max_daily_loss_display: String,
}

impl From<RiskSizing> for RiskResponse {
    fn from(sizing: RiskSizing) -> Self {
        Self {
            risk_per_trade_display: format_decimal(sizing.risk_per_trade),
            max_daily_loss_display: format_decimal(sizing.max_daily_loss),
            sizing,
        }
    }
}

/// Consistency check with display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyResponse {
    /// Raw check.
    #[serde(flatten)]
    pub check: ConsistencyCheck,
    /// Share of the target, e.g. `"38.46%"`.
    pub representation_display: String,
    /// Adjusted target with two decimals.
    pub new_target_display: String,
}

impl From<ConsistencyCheck> for ConsistencyResponse {
    fn from(check: ConsistencyCheck) -> Self {
        Self {
            representation_display: format_pct(check.representation_pct),
            new_target_display: format_decimal(check.new_target),
            check,
        }
    }
}
