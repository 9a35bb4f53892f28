//! Application Services
//!
//! Services coordinate the domain calculators with configuration and the
//! trade repository.

mod calculator_service;
mod journal_service;

pub use calculator_service::CalculatorService;
pub use journal_service::JournalService;
