//! # Domain-Assets Test Suite
//!
//! Unified test crate containing cross-subsystem scenarios that exercise the
//! asset services against a shared in-memory domain registry.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/          # Cross-subsystem choreography
//!     ├── post_lifecycle.rs
//!     ├── ownership_transfer.rs
//!     ├── pins.rs
//!     ├── vanity_urls.rs
//!     └── emoji.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p da-tests
//!
//! # By scenario
//! cargo test -p da-tests integration::post_lifecycle
//! cargo test -p da-tests integration::ownership_transfer
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
