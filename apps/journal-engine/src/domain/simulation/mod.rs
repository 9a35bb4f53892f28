//! Monte Carlo equity simulation and its display histogram.

mod histogram;
mod monte_carlo;

pub use histogram::{HistogramBin, histogram};
pub use monte_carlo::{
    MonteCarloBuilder, MonteCarloSimulator, SimulatedPath, SimulationResult, SimulationRun,
    run_simulation, run_simulation_with,
};
