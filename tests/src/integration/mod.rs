//! # Integration Scenarios
//!
//! Each module wires one or more asset services to a single
//! `InMemoryRegistry` and drives a complete user story through the public
//! API ports.

pub mod emoji;
pub mod ownership_transfer;
pub mod pins;
pub mod vanity_urls;
