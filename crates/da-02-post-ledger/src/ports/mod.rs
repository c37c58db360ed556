//! # Ports
//!
//! Hexagonal architecture interfaces for the post ledger. The inbound port is
//! what callers drive; the outbound dependency (`DomainOracle`) comes from
//! the `da-01-domain-oracle` crate.

pub mod inbound;
