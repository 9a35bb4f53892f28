//! Expectancy and compounding projections.
//!
//! Deterministic counterpart to the Monte Carlo simulator: the win/loss split
//! is fixed at `round(win_rate * trade_count)` and every trade earns the
//! expected return.
//!
//! All percentage fields are fractions (`0.55` for 55%).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::shared::math::saturate_finite;

/// Reward/risk pairs of the sensitivity table (reward, risk), as fractions.
pub const SENSITIVITY_PAIRS: [(f64, f64); 5] = [
    (0.01, 0.01),
    (0.015, 0.01),
    (0.02, 0.01),
    (0.025, 0.01),
    (0.03, 0.01),
];

/// Inputs of the expectancy calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectancyInputs {
    /// Starting capital.
    pub initial_capital: f64,
    /// Number of trades projected.
    pub trade_count: u32,
    /// Probability of a winning trade (0-1).
    pub win_rate: f64,
    /// Average return of a winning trade.
    pub avg_win_pct: f64,
    /// Average loss of a losing trade (positive fraction).
    pub avg_loss_pct: f64,
}

impl Default for ExpectancyInputs {
    fn default() -> Self {
        Self {
            initial_capital: 5000.0,
            trade_count: 10,
            win_rate: 0.55,
            avg_win_pct: 0.55,
            avg_loss_pct: 0.20,
        }
    }
}

/// One row of the reward:risk sensitivity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    /// Gain per winning trade.
    pub reward_pct: f64,
    /// Loss per losing trade.
    pub risk_pct: f64,
    /// `reward_pct / risk_pct`.
    pub reward_risk_ratio: f64,
    /// Compounded gain over the projection, in percent.
    pub gain_pct: f64,
}

/// Result of the expectancy calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectancySummary {
    /// Number of winning trades in the projection.
    pub wins: u32,
    /// Number of losing trades in the projection.
    pub losses: u32,
    /// `avg_win_pct / avg_loss_pct`; `None` when the loss size is zero.
    pub reward_risk_ratio: Option<f64>,
    /// Expected fractional return per trade.
    pub expectancy_per_trade: f64,
    /// Capital after compounding the expected return every trade.
    pub compounded_final_capital: f64,
    /// Capital with fixed position sizing.
    pub non_compounded_final_capital: f64,
    /// Compounded equity, indexed by trade number (`trade_count + 1` points).
    pub compounded_curve: Vec<f64>,
    /// Non-compounded equity, indexed by trade number (`trade_count + 1` points).
    pub non_compounded_curve: Vec<f64>,
    /// Outcome of alternative reward/risk pairs at the same win rate.
    pub sensitivity: Vec<SensitivityRow>,
}

/// Run the expectancy projection.
///
/// Never fails: degenerate inputs produce degenerate but finite output.
/// Capitals that overflow are reported as `f64::MAX`.
pub fn compute_expectancy(inputs: &ExpectancyInputs) -> ExpectancySummary {
    let ExpectancyInputs {
        initial_capital,
        trade_count,
        win_rate,
        avg_win_pct,
        avg_loss_pct,
    } = *inputs;

    let (wins, losses) = split_trades(win_rate, trade_count);

    let reward_risk_ratio = if avg_loss_pct == 0.0 {
        None
    } else {
        Some(saturate_finite(avg_win_pct / avg_loss_pct))
    };

    let expectancy_per_trade =
        saturate_finite(win_rate * avg_win_pct - (1.0 - win_rate) * avg_loss_pct);

    // Capital cannot compound below zero.
    let growth = (1.0 + expectancy_per_trade).max(0.0);
    let compounded_final_capital =
        saturate_finite(initial_capital * growth.powf(f64::from(trade_count)));

    let net_return = f64::from(wins) * avg_win_pct - f64::from(losses) * avg_loss_pct;
    let non_compounded_final_capital =
        saturate_finite(initial_capital + initial_capital * net_return);

    let per_trade_rate = if trade_count == 0 {
        0.0
    } else {
        net_return / f64::from(trade_count)
    };

    let points = trade_count as usize + 1;
    let mut compounded_curve = Vec::with_capacity(points);
    let mut non_compounded_curve = Vec::with_capacity(points);
    for i in 0..=trade_count {
        let step = f64::from(i);
        compounded_curve.push(saturate_finite(initial_capital * growth.powf(step)));
        non_compounded_curve.push(saturate_finite(initial_capital * (1.0 + step * per_trade_rate)));
    }

    let sensitivity = sensitivity_table(wins, losses);

    debug!(
        wins,
        losses,
        expectancy_per_trade,
        compounded_final_capital,
        "Expectancy projection computed"
    );

    ExpectancySummary {
        wins,
        losses,
        reward_risk_ratio,
        expectancy_per_trade,
        compounded_final_capital,
        non_compounded_final_capital,
        compounded_curve,
        non_compounded_curve,
        sensitivity,
    }
}

/// Deterministic win/loss split; the win count never exceeds `trade_count`.
fn split_trades(win_rate: f64, trade_count: u32) -> (u32, u32) {
    let raw = (win_rate.clamp(0.0, 1.0) * f64::from(trade_count)).round();
    let wins = if raw.is_finite() { raw as u32 } else { 0 };
    let wins = wins.min(trade_count);
    (wins, trade_count - wins)
}

/// Gain in percent for each fixed reward/risk pair.
fn sensitivity_table(wins: u32, losses: u32) -> Vec<SensitivityRow> {
    SENSITIVITY_PAIRS
        .iter()
        .map(|&(reward_pct, risk_pct)| {
            let growth = (1.0 + reward_pct).powf(f64::from(wins))
                * (1.0 - risk_pct).powf(f64::from(losses));
            SensitivityRow {
                reward_pct,
                risk_pct,
                reward_risk_ratio: reward_pct / risk_pct,
                gain_pct: saturate_finite((growth - 1.0) * 100.0),
            }
        })
        .collect()
}
