//! # DA-02 Post Ledger - Domain-Anchored Post Collection
//!
//! ## Purpose
//!
//! Manages link posts anchored to externally-registered domain names. Posts
//! live in a sparse, tombstoned per-domain sequence with stable ids, carry
//! their own owner field independent of the domain's registry owner, and
//! support namespace-scoped single-slot pinning.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Ids are assigned monotonically and never reused | `domain/entities.rs` - `PostBook::add()` |
//! | INVARIANT-2 | Tombstoned slots are zeroed but never compacted | `domain/entities.rs` - `PostBook::delete()` |
//! | INVARIANT-3 | Visible count equals the count of alive posts | `domain/invariants.rs` - `check_active_count()` |
//! | INVARIANT-4 | Post ownership changes only via explicit transfer | `service.rs` - sole write path to `owner` |
//! | INVARIANT-5 | A failed call leaves ledger state untouched | `domain/entities.rs` - validate-then-apply in `delete()` |
//!
//! ## Two-Factor Ownership Gate
//!
//! Every mutating entry point checks the caller against the Domain Oracle
//! (owner and not expired); operations on existing posts additionally check
//! the caller against the post's stored owner. A new domain owner may create
//! posts immediately, but existing posts stay with whoever last received them
//! through an explicit transfer.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 01 (Domain Oracle) | `DomainOracle` | domain-owner and expiry gate |
//!
//! ## Usage Example
//!
//! ```ignore
//! use da_02_post_ledger::prelude::*;
//!
//! let service = PostService::new(oracle, PostServiceConfig::default());
//! let ids = service
//!     .add_posts(alice, &domain, vec!["url1".into()], "news", U256::zero())
//!     .await?;
//! ```

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
    pub use crate::domain::entities::{Post, PostBook, PostView};
    pub use crate::domain::invariants::{check_all_invariants, InvariantViolation};
    pub use crate::errors::PostError;
    pub use crate::events::PostEvent;
    pub use crate::ports::inbound::PostApi;
    pub use crate::service::{PostService, PostServiceConfig};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Post Ledger";
