//! # Events
//!
//! Typed notifications published by the vanity URL service after successful
//! mutations. Delivery is best-effort over a broadcast channel.

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainName, U256};

/// Notifications emitted by `VanityUrlService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlEvent {
    /// A new alias was registered.
    UrlAdded {
        /// Anchor domain.
        domain: DomainName,
        /// Registered alias.
        alias: String,
        /// Record owner.
        owner: Address,
    },
    /// An alias was removed.
    UrlDeleted {
        /// Anchor domain.
        domain: DomainName,
        /// Removed alias.
        alias: String,
    },
    /// A record's URL/price was overwritten.
    UrlUpdated {
        /// Anchor domain.
        domain: DomainName,
        /// Updated alias.
        alias: String,
    },
    /// Record ownership moved to a new owner.
    OwnershipTransferred {
        /// Anchor domain.
        domain: DomainName,
        /// Previous owner (the caller).
        from: Address,
        /// New owner.
        to: Address,
        /// Aliases that moved.
        aliases: Vec<String>,
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
