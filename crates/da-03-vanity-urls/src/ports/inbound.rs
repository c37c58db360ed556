//! # Driving Ports (API - Inbound)
//!
//! The operations the vanity URL subsystem exposes to callers.

use crate::domain::entities::VanityUrl;
use crate::errors::VanityUrlError;
use async_trait::async_trait;
use shared_types::{Address, DomainName, U256};

/// Public API of the vanity URL subsystem.
#[async_trait]
pub trait VanityUrlApi: Send + Sync {
    /// Registers `alias -> url` under `domain`, owned by `caller`.
    ///
    /// Requires the domain-owner gate, a fresh non-empty alias, a non-empty
    /// URL, and exact payment of the configured registration price. `price`
    /// is the caller-chosen value stored on the record.
    async fn add_url(
        &self,
        caller: Address,
        domain: &DomainName,
        alias: &str,
        url: &str,
        price: U256,
        payment: U256,
    ) -> Result<(), VanityUrlError>;

    /// Removes an alias outright.
    async fn delete_url(
        &self,
        caller: Address,
        domain: &DomainName,
        alias: &str,
    ) -> Result<(), VanityUrlError>;

    /// Overwrites an existing record's URL and price. Owner unchanged.
    async fn update_url(
        &self,
        caller: Address,
        domain: &DomainName,
        alias: &str,
        new_url: &str,
        new_price: U256,
    ) -> Result<(), VanityUrlError>;

    /// Reassigns every record owned by `caller` under `domain` to
    /// `new_owner`. Repeating the call is a no-op.
    async fn transfer_url_ownership(
        &self,
        caller: Address,
        domain: &DomainName,
        new_owner: Address,
    ) -> Result<(), VanityUrlError>;

    /// Looks up a record. Reads never gate on expiry.
    async fn url(&self, domain: &DomainName, alias: &str) -> Option<VanityUrl>;

    /// Alias names under `domain` in insertion order.
    async fn aliases(&self, domain: &DomainName) -> Vec<String>;

    /// Number of registered aliases under `domain`.
    async fn alias_count(&self, domain: &DomainName) -> u64;
}
