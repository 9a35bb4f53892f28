//! Data Transfer Objects
//!
//! Request shapes accepted at the API boundary and their conversion into
//! domain inputs.

mod calculator_dto;
mod trade_dto;

pub use calculator_dto::{ConsistencyForm, ExpectancyForm, MonteCarloForm, RiskForm};
pub use trade_dto::RecordTradeDto;
