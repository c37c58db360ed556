//! # Ports
//!
//! Hexagonal architecture interfaces for the emoji reaction subsystem. The
//! outbound dependency (`DomainOracle`) comes from `da-01-domain-oracle`.

pub mod inbound;
