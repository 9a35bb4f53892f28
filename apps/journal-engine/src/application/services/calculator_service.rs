//! Calculator Service
//!
//! Applies the configured defaults, limits and thresholds to form input and
//! runs the stateless calculators.

use std::sync::Arc;

use crate::application::dto::{ConsistencyForm, ExpectancyForm, MonteCarloForm, RiskForm};
use crate::config::Config;
use crate::domain::expectancy::{ExpectancySummary, compute_expectancy};
use crate::domain::risk::{ConsistencyCheck, RiskSizing, check_consistency_with, size_risk};
use crate::domain::simulation::{MonteCarloSimulator, SimulationResult};

/// Stateless calculators bound to a configuration.
#[derive(Debug, Clone)]
pub struct CalculatorService {
    config: Arc<Config>,
}

impl CalculatorService {
    /// Create a new service.
    pub const fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Expectancy projection.
    pub fn expectancy(&self, form: &ExpectancyForm) -> ExpectancySummary {
        compute_expectancy(&form.to_inputs(&self.config.expectancy))
    }

    /// Monte Carlo simulation, seeded when the form carries a seed.
    pub fn monte_carlo(&self, form: &MonteCarloForm) -> SimulationResult {
        let run = form.to_run(&self.config.simulation);
        MonteCarloSimulator::new(run)
            .with_histogram_bins(self.config.simulation.histogram_bins)
            .run()
    }

    /// Percentage-of-capital risk sizing.
    pub fn risk(&self, form: &RiskForm) -> RiskSizing {
        size_risk(&form.to_input())
    }

    /// Consistency rule against the configured threshold.
    pub fn consistency(&self, form: &ConsistencyForm) -> ConsistencyCheck {
        check_consistency_with(&form.to_input(), self.config.consistency.threshold)
    }
}
