//! # Events
//!
//! Typed notifications published by the emoji reaction service. Delivery is
//! best-effort over a broadcast channel.

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainName, U256};

/// Notifications emitted by `EmojiService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionEvent {
    /// A reaction was recorded.
    ReactionAdded {
        /// Anchor domain.
        domain: DomainName,
        /// Reaction kind.
        kind: u8,
        /// Paying account.
        reactor: Address,
    },
    /// Collected fees were drained.
    RevenueWithdrawn {
        /// Account the drain was reported to.
        recipient: Address,
        /// Drained amount.
        amount: U256,
    },
}

// =============================================================================
// TESTS
// =============================================================================
