//! # Domain Names
//!
//! A domain name anchors every asset in the system. Ownership and expiry of
//! the name itself live in the external registry (the Oracle); this crate only
//! defines the name value and the key derivation used by every ledger.

use crate::primitives::{keccak256, Hash};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The keccak-256 key a domain's ledger state is stored under.
///
/// All per-domain maps (post books, alias books, reaction lists) are keyed by
/// this value rather than the raw string.
pub type DomainKey = Hash;

/// An externally-registered domain name (e.g. `"test.country"`).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainName(String);

impl DomainName {
    /// Creates a domain name from a string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derives the ledger key for this name: keccak-256 of the UTF-8 bytes.
    #[must_use]
    pub fn key(&self) -> DomainKey {
        keccak256(self.0.as_bytes())
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainName({:?})", self.0)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DomainName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for DomainName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
