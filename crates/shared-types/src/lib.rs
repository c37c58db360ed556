//! # Shared Types Crate
//!
//! Value objects shared by every asset subsystem: 20-byte account addresses,
//! 32-byte keccak hashes, domain names with their derived ledger keys, and
//! 256-bit payment amounts.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-crate primitives are defined here.
//! - **Value semantics**: these types are defined by their value, not identity;
//!   all are `Clone + Eq + Hash` and serde-serializable.
//! - **Key derivation in one place**: the `DomainName -> DomainKey` mapping
//!   (keccak-256 of the UTF-8 name) lives here so every ledger keys its maps
//!   identically.

pub mod domain_name;
pub mod primitives;

pub use domain_name::{DomainKey, DomainName};
pub use primitives::{keccak256, Address, Hash};

// Re-export U256 from primitive-types for payment amounts and prices.
pub use primitive_types::U256;
