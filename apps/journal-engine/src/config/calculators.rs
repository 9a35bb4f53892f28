//! Calculator defaults and request limits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::constants::{CONSISTENCY_THRESHOLD, DEFAULT_HISTOGRAM_BINS};

/// Monte Carlo defaults and upper bounds for API requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Paths used when a request leaves the field empty.
    #[serde(default = "default_path_count")]
    pub default_path_count: u32,
    /// Steps used when a request leaves the field empty.
    #[serde(default = "default_steps_per_path")]
    pub default_steps_per_path: u32,
    /// Trajectories retained for charting by default.
    #[serde(default = "default_curves_to_retain")]
    pub default_curves_to_retain: u32,
    /// Histogram bin count.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Requests asking for more paths are clamped to this.
    #[serde(default = "default_max_path_count")]
    pub max_path_count: u32,
    /// Requests asking for more steps are clamped to this.
    #[serde(default = "default_max_steps_per_path")]
    pub max_steps_per_path: u32,
    /// Requests asking for more retained trajectories are clamped to this.
    #[serde(default = "default_max_curves_to_retain")]
    pub max_curves_to_retain: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_path_count: default_path_count(),
            default_steps_per_path: default_steps_per_path(),
            default_curves_to_retain: default_curves_to_retain(),
            histogram_bins: default_histogram_bins(),
            max_path_count: default_max_path_count(),
            max_steps_per_path: default_max_steps_per_path(),
            max_curves_to_retain: default_max_curves_to_retain(),
        }
    }
}

const fn default_path_count() -> u32 {
    500
}

const fn default_steps_per_path() -> u32 {
    100
}

const fn default_curves_to_retain() -> u32 {
    20
}

const fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

const fn default_max_path_count() -> u32 {
    5000
}

const fn default_max_steps_per_path() -> u32 {
    1000
}

const fn default_max_curves_to_retain() -> u32 {
    100
}

/// Expectancy projection limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectancyConfig {
    /// Requests projecting more trades are clamped to this.
    #[serde(default = "default_max_trade_count")]
    pub max_trade_count: u32,
}

impl Default for ExpectancyConfig {
    fn default() -> Self {
        Self {
            max_trade_count: default_max_trade_count(),
        }
    }
}

const fn default_max_trade_count() -> u32 {
    10_000
}

/// Consistency rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    /// Largest share of the profit target one day may represent (fraction).
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

const fn default_threshold() -> Decimal {
    CONSISTENCY_THRESHOLD
}
