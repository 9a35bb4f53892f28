//! Single-formula risk calculators: percentage-of-capital sizing and the
//! consistency target rule.

mod consistency;
mod sizing;

pub use consistency::{
    ConsistencyCheck, ConsistencyInput, check_consistency, check_consistency_with,
};
pub use sizing::{RiskSizing, RiskSizingInput, size_risk};
