//! # Domain Entities
//!
//! Alias-keyed URL records and the per-domain alias book. Deletion removes
//! records outright; there is no tombstone and an alias freed by deletion can
//! be registered again.

use crate::errors::VanityUrlError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};
use std::collections::HashMap;

// =============================================================================
// VANITY URL
// =============================================================================

/// A single vanity URL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanityUrl {
    /// Target URL.
    pub url: String,
    /// Caller-chosen price attached to the record. Distinct from the fixed
    /// creation fee the service charges.
    pub price: U256,
    /// Current record owner. Set to the creator, changed only by transfer.
    pub owner: Address,
}

// =============================================================================
// ALIAS BOOK (per-domain state)
// =============================================================================

/// Per-domain alias state: the record map plus the insertion-ordered alias
/// name list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasBook {
    /// Records keyed by alias name.
    records: HashMap<String, VanityUrl>,
    /// Alias names in insertion order.
    names: Vec<String>,
}

impl AliasBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, alias: &str) -> Result<&VanityUrl, VanityUrlError> {
        self.records.get(alias).ok_or_else(|| VanityUrlError::NotExist {
            alias: alias.to_string(),
        })
    }

    /// Registers a new alias owned by `owner`.
    pub fn add(
        &mut self,
        alias: &str,
        url: &str,
        price: U256,
        owner: Address,
    ) -> Result<(), VanityUrlError> {
        if alias.is_empty() {
            return Err(VanityUrlError::EmptyAlias);
        }
        if url.is_empty() {
            return Err(VanityUrlError::EmptyUrl);
        }
        if self.records.contains_key(alias) {
            return Err(VanityUrlError::AliasExists {
                alias: alias.to_string(),
            });
        }
        self.records.insert(
            alias.to_string(),
            VanityUrl {
                url: url.to_string(),
                price,
                owner,
            },
        );
        self.names.push(alias.to_string());
        Ok(())
    }

    /// Removes an alias outright: record and name-list entry both go.
    pub fn delete(&mut self, alias: &str, caller: Address) -> Result<(), VanityUrlError> {
        if self.record(alias)?.owner != caller {
            return Err(VanityUrlError::NotUrlOwner {
                alias: alias.to_string(),
            });
        }
        self.records.remove(alias);
        self.names.retain(|name| name != alias);
        Ok(())
    }

    /// Overwrites the URL and price of an existing record. Owner unchanged.
    pub fn update(
        &mut self,
        alias: &str,
        new_url: &str,
        new_price: U256,
        caller: Address,
    ) -> Result<(), VanityUrlError> {
        let record = self
            .records
            .get_mut(alias)
            .ok_or_else(|| VanityUrlError::NotExist {
                alias: alias.to_string(),
            })?;
        if record.owner != caller {
            return Err(VanityUrlError::NotUrlOwner {
                alias: alias.to_string(),
            });
        }
        if new_url.is_empty() {
            return Err(VanityUrlError::EmptyUrl);
        }
        record.url = new_url.to_string();
        record.price = new_price;
        Ok(())
    }

    /// Reassigns every record owned by `caller` to `new_owner`, returning
    /// the moved aliases in list order. An empty result is not an error.
    pub fn transfer(&mut self, caller: Address, new_owner: Address) -> Vec<String> {
        let mut moved = Vec::new();
        for name in &self.names {
            if let Some(record) = self.records.get_mut(name) {
                if record.owner == caller {
                    record.owner = new_owner;
                    moved.push(name.clone());
                }
            }
        }
        moved
    }

    /// Looks up a record.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&VanityUrl> {
        self.records.get(alias)
    }

    /// Alias names in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.names.len() as u64
    }
}

// =============================================================================
// TESTS
// =============================================================================
