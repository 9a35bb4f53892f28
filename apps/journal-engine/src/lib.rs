// Allow unwrap/expect and pedantic noise in tests
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Journal Engine - Rust Core Library
//!
//! Statistics and equity-simulation engine for the EXL trading journal.
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: pure calculators and the journal model
//!   - `journal`: trades, day aggregation, statistics, month calendar
//!   - `expectancy`: deterministic compounding projection
//!   - `simulation`: Monte Carlo equity paths and histogram
//!   - `risk`: risk sizing and the consistency target rule
//!   - `shared`: constants, math, formatting, lenient parsing
//!
//! - **Application**: form DTOs and services
//!
//! - **Infrastructure**: in-memory trade repository, axum HTTP API
//!
//! Cross-cutting: `config` (YAML), `error` (HTTP error mapping),
//! `telemetry` (tracing subscriber).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Pure business logic.
pub mod domain;

/// Application layer - DTOs and services.
pub mod application;

/// Infrastructure layer - Adapters.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// API error types.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

pub use domain::expectancy::{ExpectancyInputs, ExpectancySummary, compute_expectancy};
pub use domain::journal::{
    DailyAggregate, JournalStats, Trade, TradeRepository, UserId, aggregate_by_day, total_pl,
    win_rate,
};
pub use domain::risk::{ConsistencyCheck, RiskSizing, check_consistency, size_risk};
pub use domain::simulation::{SimulationResult, SimulationRun, run_simulation, run_simulation_with};
pub use error::{ApiError, ErrorCode};
