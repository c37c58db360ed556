//! # DA-03 Vanity URLs - Alias-Keyed URL Records
//!
//! ## Purpose
//!
//! Manages vanity URLs anchored to externally-registered domain names. Unlike
//! the post ledger's sequential ids, records here are keyed by a caller-chosen
//! alias name. Each record carries `(url, price, owner)`; the owner field is
//! independent of the domain's registry owner and moves only via explicit
//! transfer.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | One record per alias; re-adding an existing alias fails | `domain/entities.rs` - `AliasBook::add()` |
//! | INVARIANT-2 | Deletion removes both the record and its alias-list entry | `domain/entities.rs` - `AliasBook::delete()` |
//! | INVARIANT-3 | The alias list keeps insertion order | `domain/entities.rs` - `names` vector |
//! | INVARIANT-4 | Record ownership changes only via explicit transfer | `service.rs` - sole write path to `owner` |
//!
//! There is no tombstoning here: deleted aliases vanish outright and may be
//! re-registered.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 01 (Domain Oracle) | `DomainOracle` | domain-owner and expiry gate |

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::{AliasBook, VanityUrl};
    pub use crate::errors::VanityUrlError;
    pub use crate::events::UrlEvent;
    pub use crate::ports::inbound::VanityUrlApi;
    pub use crate::service::{VanityUrlService, VanityUrlServiceConfig};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Vanity URLs";
