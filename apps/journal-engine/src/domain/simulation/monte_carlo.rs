//! Monte Carlo equity simulation.
//!
//! Each path is an independent sequence of Bernoulli trades:
//! - Win with probability `win_rate`: capital grows by `avg_win_pct`
//! - Otherwise: capital shrinks by `avg_loss_pct`
//!
//! Peak-to-trough drawdown is tracked per path. Final capitals of every path
//! feed the aggregate statistics and the histogram; only the first
//! `curves_to_retain` trajectories are kept for charting.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::histogram::{HistogramBin, histogram};
use crate::domain::shared::constants::DEFAULT_HISTOGRAM_BINS;
use crate::domain::shared::math::{mean_f64, median_at_floor_index, saturate_finite};

/// Parameters of a simulation run. Percentages are fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Starting capital of every path.
    pub initial_capital: f64,
    /// Probability of a winning trade (0-1).
    pub win_rate: f64,
    /// Growth applied on a win.
    pub avg_win_pct: f64,
    /// Loss applied on a losing trade (positive fraction).
    pub avg_loss_pct: f64,
    /// Number of independent paths.
    pub path_count: u32,
    /// Trades per path.
    pub steps_per_path: u32,
    /// How many leading trajectories to keep for display.
    pub curves_to_retain: u32,
    /// Seed for reproducibility (None = thread RNG).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationRun {
    fn default() -> Self {
        Self {
            initial_capital: 10_000.0,
            win_rate: 0.5,
            avg_win_pct: 0.02,
            avg_loss_pct: 0.01,
            path_count: 500,
            steps_per_path: 100,
            curves_to_retain: 20,
            seed: None,
        }
    }
}

/// A retained equity trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPath {
    /// Path index.
    pub index: u32,
    /// Capital after each step; `steps_per_path + 1` points.
    pub trajectory: Vec<f64>,
    /// Largest peak-to-trough decline along the path.
    pub max_drawdown: f64,
}

impl SimulatedPath {
    /// Capital at the end of the path.
    #[must_use]
    pub fn final_capital(&self) -> f64 {
        self.trajectory.last().copied().unwrap_or(0.0)
    }
}

/// Complete Monte Carlo simulation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Parameters used.
    pub run: SimulationRun,
    /// Number of paths simulated.
    pub paths_completed: u32,
    /// Arithmetic mean of final capitals.
    pub mean_final_capital: f64,
    /// Element at index `n / 2` of the sorted final capitals (the upper middle
    /// value for an even count; no interpolation).
    pub median_final_capital: f64,
    /// Highest final capital.
    pub best_final_capital: f64,
    /// Lowest final capital.
    pub worst_final_capital: f64,
    /// `mean_final_capital - initial_capital`.
    pub mean_pnl: f64,
    /// `median_final_capital - initial_capital`.
    pub median_pnl: f64,
    /// `best_final_capital - initial_capital`.
    pub best_pnl: f64,
    /// `worst_final_capital - initial_capital`.
    pub worst_pnl: f64,
    /// Largest drawdown observed on any path.
    pub max_drawdown: f64,
    /// Percentage of paths ending above the initial capital.
    pub profitable_paths_pct: f64,
    /// Max drawdown of every path, by path index.
    pub path_drawdowns: Vec<f64>,
    /// The first `curves_to_retain` trajectories.
    pub retained_paths: Vec<SimulatedPath>,
    /// Equal-width histogram of final capitals.
    pub histogram: Vec<HistogramBin>,
}

/// Monte Carlo simulator.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    run: SimulationRun,
    histogram_bins: usize,
}

impl MonteCarloSimulator {
    /// Create a new simulator.
    #[must_use]
    pub const fn new(run: SimulationRun) -> Self {
        Self {
            run,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }

    /// Override the histogram bucket count.
    #[must_use]
    pub const fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    /// Parameters of the run.
    #[must_use]
    pub const fn run_params(&self) -> &SimulationRun {
        &self.run
    }

    /// Run with the configured seed, or the thread RNG when unseeded.
    pub fn run(&self) -> SimulationResult {
        match self.run.seed {
            Some(seed) => self.run_with(&mut StdRng::seed_from_u64(seed)),
            None => self.run_with(&mut rand::rng()),
        }
    }

    /// Run with an injected random source.
    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationResult {
        let run = &self.run;
        info!(
            paths = run.path_count,
            steps = run.steps_per_path,
            win_rate = run.win_rate,
            "Running Monte Carlo simulation"
        );

        let win_factor = 1.0 + run.avg_win_pct;
        let loss_factor = 1.0 - run.avg_loss_pct;
        let retain = run.curves_to_retain.min(run.path_count);

        let mut final_capitals = Vec::with_capacity(run.path_count as usize);
        let mut path_drawdowns = Vec::with_capacity(run.path_count as usize);
        let mut retained_paths = Vec::with_capacity(retain as usize);
        let mut trajectory = Vec::with_capacity(run.steps_per_path as usize + 1);
        let mut max_drawdown = 0.0_f64;

        for index in 0..run.path_count {
            trajectory.clear();

            let mut capital = run.initial_capital;
            let mut peak = capital;
            let mut path_drawdown = 0.0_f64;
            trajectory.push(capital);

            for _ in 0..run.steps_per_path {
                let factor = if rng.random::<f64>() < run.win_rate {
                    win_factor
                } else {
                    loss_factor
                };
                capital = saturate_finite(capital * factor);
                trajectory.push(capital);
                peak = peak.max(capital);
                path_drawdown = path_drawdown.max(saturate_finite(peak - capital));
            }

            final_capitals.push(capital);
            path_drawdowns.push(path_drawdown);
            max_drawdown = max_drawdown.max(path_drawdown);

            if index < retain {
                retained_paths.push(SimulatedPath {
                    index,
                    trajectory: trajectory.clone(),
                    max_drawdown: path_drawdown,
                });
            }

            if (index + 1) % 1000 == 0 {
                debug!(paths = index + 1, "Monte Carlo progress");
            }
        }

        let result = self.summarize(final_capitals, path_drawdowns, retained_paths, max_drawdown);

        info!(
            mean = result.mean_final_capital,
            median = result.median_final_capital,
            max_drawdown = result.max_drawdown,
            "Monte Carlo simulation complete"
        );

        result
    }

    fn summarize(
        &self,
        mut final_capitals: Vec<f64>,
        path_drawdowns: Vec<f64>,
        retained_paths: Vec<SimulatedPath>,
        max_drawdown: f64,
    ) -> SimulationResult {
        let initial = self.run.initial_capital;
        let histogram = histogram(&final_capitals, self.histogram_bins);

        let profitable = final_capitals.iter().filter(|c| **c > initial).count();
        let profitable_paths_pct = if final_capitals.is_empty() {
            0.0
        } else {
            profitable as f64 / final_capitals.len() as f64 * 100.0
        };

        let mean = mean_f64(&final_capitals);
        final_capitals.sort_by(f64::total_cmp);
        let median = median_at_floor_index(&final_capitals);
        let worst = final_capitals.first().copied();
        let best = final_capitals.last().copied();

        // No paths: every statistic collapses to zero.
        let pnl = |value: Option<f64>| value.map_or(0.0, |v| saturate_finite(v - initial));
        let capital = |value: Option<f64>| value.map_or(0.0, saturate_finite);

        SimulationResult {
            run: self.run.clone(),
            paths_completed: path_drawdowns.len() as u32,
            mean_final_capital: capital(mean),
            median_final_capital: capital(median),
            best_final_capital: capital(best),
            worst_final_capital: capital(worst),
            mean_pnl: pnl(mean),
            median_pnl: pnl(median),
            best_pnl: pnl(best),
            worst_pnl: pnl(worst),
            max_drawdown: saturate_finite(max_drawdown),
            profitable_paths_pct,
            path_drawdowns,
            retained_paths,
            histogram,
        }
    }
}

/// Run a simulation using the run's seed (or the thread RNG).
pub fn run_simulation(run: &SimulationRun) -> SimulationResult {
    MonteCarloSimulator::new(run.clone()).run()
}

/// Run a simulation with an injected random source.
pub fn run_simulation_with<R: Rng + ?Sized>(
    run: &SimulationRun,
    rng: &mut R,
) -> SimulationResult {
    MonteCarloSimulator::new(run.clone()).run_with(rng)
}

/// Builder for Monte Carlo simulation.
#[derive(Debug, Default)]
pub struct MonteCarloBuilder {
    run: SimulationRun,
    histogram_bins: Option<usize>,
}

impl MonteCarloBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set initial capital.
    #[must_use]
    pub const fn initial_capital(mut self, capital: f64) -> Self {
        self.run.initial_capital = capital;
        self
    }

    /// Set win rate (fraction).
    #[must_use]
    pub const fn win_rate(mut self, win_rate: f64) -> Self {
        self.run.win_rate = win_rate;
        self
    }

    /// Set average win (fraction).
    #[must_use]
    pub const fn avg_win_pct(mut self, pct: f64) -> Self {
        self.run.avg_win_pct = pct;
        self
    }

    /// Set average loss (fraction).
    #[must_use]
    pub const fn avg_loss_pct(mut self, pct: f64) -> Self {
        self.run.avg_loss_pct = pct;
        self
    }

    /// Set number of paths.
    #[must_use]
    pub const fn paths(mut self, n: u32) -> Self {
        self.run.path_count = n;
        self
    }

    /// Set steps per path.
    #[must_use]
    pub const fn steps(mut self, n: u32) -> Self {
        self.run.steps_per_path = n;
        self
    }

    /// Set number of retained trajectories.
    #[must_use]
    pub const fn curves_to_retain(mut self, n: u32) -> Self {
        self.run.curves_to_retain = n;
        self
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.run.seed = Some(seed);
        self
    }

    /// Set histogram bucket count.
    #[must_use]
    pub const fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Build the simulator.
    #[must_use]
    pub fn build(self) -> MonteCarloSimulator {
        MonteCarloSimulator {
            run: self.run,
            histogram_bins: self.histogram_bins.unwrap_or(DEFAULT_HISTOGRAM_BINS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::RngCore;

    /// Random source that always yields the same word.
    struct ConstantRng(u64);

    impl RngCore for ConstantRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    /// Draws 0.0 every time: every trade wins when `win_rate > 0`.
    fn always_win() -> ConstantRng {
        ConstantRng(0)
    }

    /// Draws just below 1.0 every time: every trade loses when `win_rate < 1`.
    fn always_lose() -> ConstantRng {
        ConstantRng(u64::MAX)
    }

    fn small_run() -> SimulationRun {
        SimulationRun {
            initial_capital: 1000.0,
            win_rate: 0.5,
            avg_win_pct: 0.1,
            avg_loss_pct: 0.1,
            path_count: 4,
            steps_per_path: 3,
            curves_to_retain: 2,
            seed: None,
        }
    }

    #[test]
    fn test_run_defaults() {
        let run = SimulationRun::default();
        assert_eq!(run.path_count, 500);
        assert_eq!(run.steps_per_path, 100);
        assert!(run.seed.is_none());
    }

    #[test]
    fn test_all_wins_has_no_drawdown() {
        let result = run_simulation_with(&small_run(), &mut always_win());

        let expected = 1000.0 * 1.1_f64.powi(3);
        assert!((result.best_final_capital - expected).abs() < 1e-9);
        assert!((result.worst_final_capital - expected).abs() < 1e-9);
        assert_eq!(result.max_drawdown, 0.0);
        assert!(result.path_drawdowns.iter().all(|d| *d == 0.0));
        assert_eq!(result.profitable_paths_pct, 100.0);
    }

    #[test]
    fn test_all_losses_drawdown_from_start() {
        let result = run_simulation_with(&small_run(), &mut always_lose());

        let final_capital = 1000.0 * 0.9_f64.powi(3);
        assert!((result.worst_final_capital - final_capital).abs() < 1e-9);
        assert!((result.max_drawdown - (1000.0 - final_capital)).abs() < 1e-9);
        assert!((result.mean_pnl - (final_capital - 1000.0)).abs() < 1e-9);
        assert_eq!(result.profitable_paths_pct, 0.0);
    }

    #[test]
    fn test_retains_only_leading_curves() {
        let result = run_simulation_with(&small_run(), &mut always_win());

        assert_eq!(result.paths_completed, 4);
        assert_eq!(result.path_drawdowns.len(), 4);
        assert_eq!(result.retained_paths.len(), 2);
        assert_eq!(result.retained_paths[0].index, 0);
        assert_eq!(result.retained_paths[1].index, 1);
        for path in &result.retained_paths {
            assert_eq!(path.trajectory.len(), 4);
            assert_eq!(path.trajectory[0], 1000.0);
        }
    }

    #[test]
    fn test_histogram_counts_every_path() {
        let run = SimulationRun {
            path_count: 250,
            seed: Some(7),
            ..SimulationRun::default()
        };
        let result = run_simulation(&run);
        assert_eq!(result.histogram.len(), DEFAULT_HISTOGRAM_BINS);
        assert_eq!(result.histogram.iter().map(|b| b.count).sum::<u32>(), 250);
    }

    #[test]
    fn test_zero_paths_is_degenerate() {
        let run = SimulationRun {
            path_count: 0,
            ..small_run()
        };
        let result = run_simulation_with(&run, &mut always_win());

        assert_eq!(result.paths_completed, 0);
        assert_eq!(result.median_final_capital, 0.0);
        assert_eq!(result.mean_pnl, 0.0);
        assert!(result.retained_paths.is_empty());
        assert!(result.histogram.is_empty());
    }

    #[test]
    fn test_zero_steps_keeps_initial_capital() {
        let run = SimulationRun {
            steps_per_path: 0,
            ..small_run()
        };
        let result = run_simulation_with(&run, &mut always_lose());
        assert_eq!(result.mean_final_capital, 1000.0);
        assert_eq!(result.retained_paths[0].trajectory, vec![1000.0]);
        assert_eq!(result.max_drawdown, 0.0);
    }

    #[test]
    fn test_reproducibility_with_seed() {
        let run = SimulationRun {
            seed: Some(12345),
            path_count: 50,
            ..SimulationRun::default()
        };

        let first = run_simulation(&run);
        let second = run_simulation(&run);
        assert_eq!(first.mean_final_capital, second.mean_final_capital);
        assert_eq!(first.retained_paths, second.retained_paths);
    }

    #[test]
    fn test_builder() {
        let simulator = MonteCarloBuilder::new()
            .initial_capital(50_000.0)
            .win_rate(0.6)
            .avg_win_pct(0.03)
            .avg_loss_pct(0.02)
            .paths(40)
            .steps(25)
            .curves_to_retain(5)
            .seed(99)
            .histogram_bins(10)
            .build();

        let result = simulator.run();
        assert_eq!(result.paths_completed, 40);
        assert_eq!(result.retained_paths.len(), 5);
        assert_eq!(result.histogram.len(), 10);
        assert_eq!(simulator.run_params().seed, Some(99));
    }

    #[test]
    fn test_overflowing_paths_saturate() {
        let run = SimulationRun {
            initial_capital: 1000.0,
            win_rate: 1.0,
            avg_win_pct: 1e10,
            avg_loss_pct: 0.5,
            path_count: 3,
            steps_per_path: 1000,
            curves_to_retain: 1,
            seed: None,
        };
        let result = run_simulation_with(&run, &mut always_win());

        assert_eq!(result.best_final_capital, f64::MAX);
        assert_eq!(result.mean_final_capital, f64::MAX);
        assert!(result.mean_pnl.is_finite());
        assert_eq!(result.max_drawdown, 0.0);
        assert!(result.retained_paths[0].trajectory.iter().all(|v| v.is_finite()));
        assert_eq!(result.histogram.iter().map(|b| b.count).sum::<u32>(), 3);
    }

    proptest! {
        #[test]
        fn prop_drawdowns_non_negative_and_stats_ordered(
            seed in any::<u64>(),
            win_rate in 0.0f64..=1.0,
            avg_win in 0.0f64..0.5,
            avg_loss in 0.0f64..0.5,
            paths in 1u32..40,
            steps in 0u32..60,
        ) {
            let run = SimulationRun {
                initial_capital: 10_000.0,
                win_rate,
                avg_win_pct: avg_win,
                avg_loss_pct: avg_loss,
                path_count: paths,
                steps_per_path: steps,
                curves_to_retain: paths,
                seed: Some(seed),
            };
            let result = run_simulation(&run);

            prop_assert!(result.path_drawdowns.iter().all(|d| *d >= 0.0));
            prop_assert!(result.max_drawdown >= 0.0);
            let tolerance = 1e-9 * result.best_final_capital.abs().max(1.0);
            prop_assert!(result.worst_final_capital <= result.mean_final_capital + tolerance);
            prop_assert!(result.mean_final_capital <= result.best_final_capital + tolerance);

            for path in &result.retained_paths {
                let non_decreasing = path.trajectory.windows(2).all(|w| w[1] >= w[0]);
                if non_decreasing {
                    prop_assert_eq!(path.max_drawdown, 0.0);
                }
            }
        }
    }
}
