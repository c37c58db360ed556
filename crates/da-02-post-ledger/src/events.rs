//! # Events
//!
//! Typed notifications published by the post service after successful
//! mutations. Delivery is best-effort over a broadcast channel; subscribers
//! that lag or disconnect never block or fail the mutation.

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainName, U256};

/// Notifications emitted by `PostService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostEvent {
    /// New posts were appended.
    PostsAdded {
        /// Anchor domain.
        domain: DomainName,
        /// Assigned ids.
        ids: Vec<u64>,
        /// Owner of the new posts.
        owner: Address,
    },
    /// Posts were tombstoned.
    PostsDeleted {
        /// Anchor domain.
        domain: DomainName,
        /// Tombstoned ids.
        ids: Vec<u64>,
    },
    /// A post's URL was overwritten.
    PostUpdated {
        /// Anchor domain.
        domain: DomainName,
        /// Updated id.
        id: u64,
    },
    /// Post ownership moved to a new owner.
    OwnershipTransferred {
        /// Anchor domain.
        domain: DomainName,
        /// Previous owner (the caller).
        from: Address,
        /// New owner.
        to: Address,
        /// Ids that moved.
        ids: Vec<u64>,
    },
    /// A post was pinned.
    PostPinned {
        /// Anchor domain.
        domain: DomainName,
        /// Pin slot owner.
        owner: Address,
        /// Pin slot namespace.
        namespace: String,
        /// Pinned id.
        id: u64,
    },
    /// A pin slot was cleared.
    PostUnpinned {
        /// Anchor domain.
        domain: DomainName,
        /// Pin slot owner.
        owner: Address,
        /// Pin slot namespace.
        namespace: String,
        /// Id that was pinned.
        id: u64,
    },
    /// Legacy posts were imported.
    PostsMigrated {
        /// Anchor domain.
        domain: DomainName,
        /// Number of imported posts.
        count: u64,
        /// Owner the imports were assigned to.
        owner: Address,
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
