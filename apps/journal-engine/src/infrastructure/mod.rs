//! Infrastructure Layer
//!
//! Adapters around the domain:
//!
//! - `persistence/`: trade repository implementations
//! - `http/`: REST API (axum)

pub mod http;
pub mod persistence;
