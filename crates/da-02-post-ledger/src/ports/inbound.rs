//! # Driving Ports (API - Inbound)
//!
//! The operations the post ledger exposes to callers. `caller` stands in for
//! the transaction sender; all authorization derives from it and the Domain
//! Oracle, never from ambient state.

use crate::domain::entities::PostView;
use crate::errors::PostError;
use async_trait::async_trait;
use shared_types::{Address, DomainName, U256};

/// Public API of the post ledger.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Appends one post per URL under `domain`, owned by `caller`.
    ///
    /// Requires the domain-owner gate, non-empty URLs, and exact payment of
    /// the configured creation price (zero unless configured).
    ///
    /// # Returns
    ///
    /// The assigned ids, continuing the domain's counter.
    async fn add_posts(
        &self,
        caller: Address,
        domain: &DomainName,
        urls: Vec<String>,
        namespace: &str,
        payment: U256,
    ) -> Result<Vec<u64>, PostError>;

    /// Tombstones the given posts.
    ///
    /// Requires the domain-owner gate plus post ownership of every id;
    /// nothing is deleted when any id fails validation.
    async fn delete_posts(
        &self,
        caller: Address,
        domain: &DomainName,
        ids: &[u64],
    ) -> Result<(), PostError>;

    /// Overwrites a post's URL in place.
    async fn update_post(
        &self,
        caller: Address,
        domain: &DomainName,
        id: u64,
        new_url: &str,
    ) -> Result<(), PostError>;

    /// Reassigns every alive post owned by `caller` to `new_owner`, all
    /// namespaces if `all`, otherwise only those tagged `namespace`.
    ///
    /// The only sanctioned path by which post ownership changes; registry
    /// domain transfers never move post ownership. Repeating the call once
    /// matching posts have moved is a no-op.
    async fn transfer_post_ownership(
        &self,
        caller: Address,
        domain: &DomainName,
        new_owner: Address,
        all: bool,
        namespace: &str,
    ) -> Result<(), PostError>;

    /// Pins `id` into the caller's `(domain, namespace)` pin slot.
    async fn pin_post(
        &self,
        caller: Address,
        domain: &DomainName,
        namespace: &str,
        id: u64,
    ) -> Result<(), PostError>;

    /// Clears the caller's `(domain, namespace)` pin slot.
    async fn unpin_post(
        &self,
        caller: Address,
        domain: &DomainName,
        namespace: &str,
    ) -> Result<(), PostError>;

    /// The alive posts of `domain` in insertion order.
    ///
    /// Reads never gate on expiry; callers should treat results from an
    /// expired domain as stale.
    async fn posts(&self, domain: &DomainName) -> Vec<PostView>;

    /// Count of alive posts under `domain`.
    async fn post_count(&self, domain: &DomainName) -> u64;

    /// The live pin for `(domain, owner, namespace)`, if any.
    async fn pinned_post(
        &self,
        domain: &DomainName,
        owner: Address,
        namespace: &str,
    ) -> Option<u64>;
}
