//! Calculator form DTOs.
//!
//! Forms carry the raw strings typed by the user. Conversion never fails:
//! unparsable values become zero, percentage fields are whole numbers, and
//! counts above the configured limits are clamped.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{ExpectancyConfig, SimulationConfig};
use crate::domain::expectancy::ExpectancyInputs;
use crate::domain::risk::{ConsistencyInput, RiskSizingInput};
use crate::domain::shared::{
    parse_count, parse_decimal, parse_decimal_percent, parse_f64, parse_percent,
};
use crate::domain::simulation::SimulationRun;

/// Expectancy calculator form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectancyForm {
    /// Starting capital.
    pub initial_capital: String,
    /// Number of trades to project.
    pub trade_count: String,
    /// Win rate in percent.
    pub win_rate: String,
    /// Average win in percent.
    pub avg_win_pct: String,
    /// Average loss in percent.
    pub avg_loss_pct: String,
}

impl ExpectancyForm {
    /// Parse the form into calculator inputs.
    #[must_use]
    pub fn to_inputs(&self, limits: &ExpectancyConfig) -> ExpectancyInputs {
        ExpectancyInputs {
            initial_capital: parse_f64(&self.initial_capital),
            trade_count: clamp_count(
                "trade_count",
                parse_count(&self.trade_count),
                limits.max_trade_count,
            ),
            win_rate: parse_percent(&self.win_rate),
            avg_win_pct: parse_percent(&self.avg_win_pct),
            avg_loss_pct: parse_percent(&self.avg_loss_pct),
        }
    }
}

/// Monte Carlo form.
///
/// Count fields left blank fall back to the configured defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloForm {
    /// Starting capital.
    pub initial_capital: String,
    /// Win rate in percent.
    pub win_rate: String,
    /// Average win in percent.
    pub avg_win_pct: String,
    /// Average loss in percent.
    pub avg_loss_pct: String,
    /// Number of paths.
    pub path_count: String,
    /// Trades per path.
    pub steps_per_path: String,
    /// Trajectories to return for charting.
    pub curves_to_retain: String,
    /// Optional seed for a reproducible run.
    pub seed: Option<u64>,
}

impl MonteCarloForm {
    /// Parse the form into a simulation run.
    #[must_use]
    pub fn to_run(&self, limits: &SimulationConfig) -> SimulationRun {
        let path_count = count_or_default(&self.path_count, limits.default_path_count);
        let steps_per_path = count_or_default(&self.steps_per_path, limits.default_steps_per_path);
        let curves_to_retain =
            count_or_default(&self.curves_to_retain, limits.default_curves_to_retain);

        SimulationRun {
            initial_capital: parse_f64(&self.initial_capital),
            win_rate: parse_percent(&self.win_rate),
            avg_win_pct: parse_percent(&self.avg_win_pct),
            avg_loss_pct: parse_percent(&self.avg_loss_pct),
            path_count: clamp_count("path_count", path_count, limits.max_path_count),
            steps_per_path: clamp_count(
                "steps_per_path",
                steps_per_path,
                limits.max_steps_per_path,
            ),
            curves_to_retain: clamp_count(
                "curves_to_retain",
                curves_to_retain,
                limits.max_curves_to_retain,
            ),
            seed: self.seed,
        }
    }
}

/// Risk sizing form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskForm {
    /// Account value.
    pub portfolio_value: String,
    /// Daily risk in percent.
    pub daily_risk_pct: String,
    /// Per-trade risk in percent.
    pub trade_risk_pct: String,
    /// Planned trades per day.
    pub trades_per_day: String,
}

impl RiskForm {
    /// Parse the form into sizing inputs.
    #[must_use]
    pub fn to_input(&self) -> RiskSizingInput {
        RiskSizingInput {
            portfolio_value: parse_decimal(&self.portfolio_value),
            daily_risk_pct: parse_decimal_percent(&self.daily_risk_pct),
            trade_risk_pct: parse_decimal_percent(&self.trade_risk_pct),
            trades_per_day: parse_count(&self.trades_per_day),
        }
    }
}

/// Consistency rule form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsistencyForm {
    /// Current profit target.
    pub current_profit_target: String,
    /// Largest single-day profit.
    pub largest_single_day: String,
}

impl ConsistencyForm {
    /// Parse the form into rule inputs.
    #[must_use]
    pub fn to_input(&self) -> ConsistencyInput {
        ConsistencyInput {
            current_profit_target: parse_decimal(&self.current_profit_target),
            largest_single_day: parse_decimal(&self.largest_single_day),
        }
    }
}

fn count_or_default(raw: &str, default: u32) -> u32 {
    if raw.trim().is_empty() {
        default
    } else {
        parse_count(raw)
    }
}

fn clamp_count(field: &'static str, requested: u32, max: u32) -> u32 {
    if requested > max {
        warn!(field, requested, max, "Clamping calculator input to configured limit");
        max
    } else {
        requested
    }
}
