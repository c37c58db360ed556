//! # Ports
//!
//! Hexagonal architecture interfaces for the vanity URL subsystem. The
//! outbound dependency (`DomainOracle`) comes from `da-01-domain-oracle`.

pub mod inbound;
