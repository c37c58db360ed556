//! # Oracle Adapters
//!
//! Implementations of the `DomainOracle` port.

pub mod registry;

pub use registry::InMemoryRegistry;
