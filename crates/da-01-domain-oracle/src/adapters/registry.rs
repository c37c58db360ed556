//! # In-Memory Registry
//!
//! `DomainOracle` implementation backed by a plain map, for tests and local
//! deployments. Production deployments adapt the real name registry instead.
//!
//! Time is a manually-advanced counter rather than the wall clock so that
//! expiry scenarios are deterministic.

use crate::ports::DomainOracle;
use async_trait::async_trait;
use shared_types::{Address, DomainKey, DomainName};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Default registration duration: 365 days.
pub const DEFAULT_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// A single registered domain.
#[derive(Debug, Clone)]
struct DomainRecord {
    owner: Address,
    expires_at: u64,
}

/// In-memory domain registry for testing.
#[derive(Debug)]
pub struct InMemoryRegistry {
    /// Registered domains, keyed by the domain's ledger key.
    records: RwLock<HashMap<DomainKey, DomainRecord>>,
    /// Current registry time in seconds.
    now: RwLock<u64>,
    /// Registration duration granted on `register`.
    duration_secs: u64,
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistry {
    /// Creates an empty registry with the default registration duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_DURATION_SECS)
    }

    /// Creates an empty registry with a custom registration duration.
    #[must_use]
    pub fn with_duration(duration_secs: u64) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            now: RwLock::new(0),
            duration_secs,
        }
    }

    /// Registers `domain` to `owner`, granting the full duration from now.
    ///
    /// Re-registering an existing domain overwrites owner and expiry, the
    /// same way the registry treats a renewal by a new holder.
    pub fn register(&self, domain: &DomainName, owner: Address) {
        let now = *self.now.read();
        let record = DomainRecord {
            owner,
            expires_at: now + self.duration_secs,
        };
        debug!(domain = %domain, owner = %owner, expires_at = record.expires_at, "register");
        self.records.write().insert(domain.key(), record);
    }

    /// Transfers a registered domain to `new_owner`, keeping its expiry.
    ///
    /// Unknown domains are ignored; the registry is the source of truth and
    /// the asset ledgers never observe this call directly.
    pub fn transfer(&self, domain: &DomainName, new_owner: Address) {
        if let Some(record) = self.records.write().get_mut(&domain.key()) {
            debug!(domain = %domain, new_owner = %new_owner, "transfer");
            record.owner = new_owner;
        }
    }

    /// Advances the registry clock by `secs`.
    pub fn advance_time(&self, secs: u64) {
        let mut now = self.now.write();
        *now += secs;
    }

    /// Current registry time in seconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        *self.now.read()
    }
}

#[async_trait]
impl DomainOracle for InMemoryRegistry {
    async fn owner_of(&self, domain: &DomainName) -> Address {
        self.records
            .read()
            .get(&domain.key())
            .map_or(Address::ZERO, |record| record.owner)
    }

    async fn is_expired(&self, domain: &DomainName) -> bool {
        let now = *self.now.read();
        self.records
            .read()
            .get(&domain.key())
            .map_or(true, |record| now > record.expires_at)
    }

    async fn registration_duration(&self) -> u64 {
        self.duration_secs
    }
}

// =============================================================================
// TESTS
// =============================================================================
