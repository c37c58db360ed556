//! # DA-01 Domain Oracle - Registry Ownership Port
//!
//! ## Purpose
//!
//! Read-only query surface over the external domain-name registry: who owns a
//! domain right now, and whether its registration has expired. Every gated
//! operation in the asset subsystems re-queries this port at call time; there
//! is no local caching and no change notification.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Only the registry mutates domain records | `ports.rs` - trait is read-only |
//! | INVARIANT-2 | Unregistered domains report the zero owner | `adapters/registry.rs` - `owner_of()` |
//! | INVARIANT-3 | Expiry is derived, never scheduled | `adapters/registry.rs` - `is_expired()` timestamp comparison |
//!
//! ## Consumers
//!
//! | Subsystem | Usage |
//! |-----------|-------|
//! | 02 (Post Ledger) | domain-owner + expiry gate |
//! | 03 (Vanity URLs) | domain-owner + expiry gate |
//! | 04 (Emoji Reactions) | expiry gate |

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod ports;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::InMemoryRegistry;
    pub use crate::ports::DomainOracle;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Domain Oracle";
