//! # DA-04 Emoji Reactions - Per-Domain Reaction Lists
//!
//! ## Purpose
//!
//! Append-only emoji reactions attached to externally-registered domain
//! names. Anyone may react to a live domain; there is no per-item ownership,
//! no deletion and no transfer. Each reaction kind carries a configurable
//! price, and a reaction is accepted only with exact payment.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | The reaction list is append-only and keeps insertion order | `domain/entities.rs` - `ReactionBook` |
//! | INVARIANT-2 | A reaction is recorded only with exact payment of its kind's price | `service.rs` - `add_reaction()` |
//! | INVARIANT-3 | Reactions to expired domains are rejected | `service.rs` - expiry gate |
//!
//! Unlike posts and vanity URLs there is no domain-owner gate here: reacting
//! is open to any caller while the domain is live.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 01 (Domain Oracle) | `DomainOracle` | expiry gate |

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
    pub use crate::domain::entities::{EmojiReaction, ReactionBook};
    pub use crate::errors::EmojiError;
    pub use crate::events::ReactionEvent;
    pub use crate::ports::inbound::EmojiApi;
    pub use crate::service::{EmojiService, EmojiServiceConfig};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Emoji Reactions";
