//! Domain layer.
//!
//! Pure calculators and the journal model. Nothing here performs I/O except
//! through the [`journal::TradeRepository`] port.

pub mod expectancy;
pub mod journal;
pub mod risk;
pub mod shared;
pub mod simulation;
