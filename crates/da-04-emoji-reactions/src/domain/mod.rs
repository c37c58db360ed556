//! # Domain Layer
//!
//! Pure reaction-list state. No I/O, no gating; the service layer owns the
//! expiry and payment checks.

pub mod entities;
