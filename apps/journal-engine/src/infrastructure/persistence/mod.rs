//! Persistence Adapters
//!
//! Implementations of the journal repository trait.

pub mod in_memory;

pub use in_memory::InMemoryTradeRepository;
