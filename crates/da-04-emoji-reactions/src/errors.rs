//! # Error Types
//!
//! Failure taxonomy for emoji reaction operations.

use shared_types::U256;
use thiserror::Error;

/// Errors returned by emoji reaction operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmojiError {
    /// The domain's registration has lapsed.
    #[error("expired domain")]
    DomainExpired,

    /// Payment did not match the reaction kind's price exactly.
    #[error("incorrect payment: required {required}, provided {provided}")]
    IncorrectPayment {
        /// Price of the requested reaction kind.
        required: U256,
        /// Amount the caller attached.
        provided: U256,
    },

    /// The service is paused.
    #[error("paused")]
    Paused,

    /// Caller may not perform this administrative operation.
    #[error("must be admin or revenue account")]
    NotAuthorized,
}

// =============================================================================
// TESTS
// =============================================================================
