//! # Domain Oracle Port
//!
//! The interface the asset subsystems depend on for domain ownership truth.
//! Adapters implement this trait over the real registry (or an in-memory one
//! for tests and local runs). Dependencies point inward: consumers hold a
//! `DomainOracle` handle and never talk to the registry directly.

use async_trait::async_trait;
use shared_types::{Address, DomainName};

/// Read-only view of the external domain registry.
///
/// Every gate check re-queries this interface; implementations must not
/// cache on behalf of callers. All methods are infallible by contract: an
/// unknown domain is reported as unowned and expired rather than as an error.
#[async_trait]
pub trait DomainOracle: Send + Sync {
    /// Current owner of `domain`.
    ///
    /// # Returns
    ///
    /// * The registered owner address
    /// * `Address::ZERO` if the domain was never registered
    async fn owner_of(&self, domain: &DomainName) -> Address;

    /// Whether `domain`'s registration has lapsed.
    ///
    /// Expiry is a derived boolean (current time vs. stored expiry), not a
    /// scheduled event. Unregistered domains read as expired.
    async fn is_expired(&self, domain: &DomainName) -> bool;

    /// Registration duration in seconds granted by the registry.
    ///
    /// Used only by test/setup tooling; core gate logic never calls this.
    async fn registration_duration(&self) -> u64;
}
