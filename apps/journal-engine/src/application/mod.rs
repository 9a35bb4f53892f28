//! Application Layer
//!
//! Orchestrates the domain for the API:
//!
//! - **DTOs**: request shapes and their lenient conversion into domain inputs
//! - **Services**: journal queries over a repository, configured calculators

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
