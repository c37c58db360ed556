//! # Domain Layer
//!
//! Pure ledger logic: entities, mutation rules, and invariant checks. No
//! oracle access, no locking, no I/O; the service layer orchestrates those.

pub mod entities;
pub mod invariants;
