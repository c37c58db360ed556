//! # Domain Layer
//!
//! Pure alias-book logic. No oracle access, no locking, no I/O.

pub mod entities;
