//! # Error Types
//!
//! Failure taxonomy for post ledger operations. Every failure is synchronous,
//! surfaced verbatim to the caller, and aborts the call with no partial state
//! change.

use shared_types::U256;
use thiserror::Error;

/// Errors returned by post ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    /// Caller is not the domain's current registry owner.
    #[error("only domain owner")]
    NotDomainOwner,

    /// The domain's registration has lapsed.
    #[error("expired domain")]
    DomainExpired,

    /// Caller does not own the addressed post.
    #[error("only post owner: post {id}")]
    NotPostOwner {
        /// The offending post id.
        id: u64,
    },

    /// Post id was never assigned for this domain.
    #[error("invalid post id: {id}")]
    InvalidId {
        /// The out-of-range id.
        id: u64,
    },

    /// Post id is valid but the slot is tombstoned.
    #[error("post does not exist: {id}")]
    NotExist {
        /// The tombstoned id.
        id: u64,
    },

    /// A supplied URL was empty.
    #[error("empty url")]
    EmptyUrl,

    /// Payment did not match the configured price exactly.
    #[error("incorrect payment: required {required}, provided {provided}")]
    IncorrectPayment {
        /// Configured fixed price.
        required: U256,
        /// Amount the caller attached.
        provided: U256,
    },

    /// Pin target carries a different namespace than the pin slot.
    #[error("namespace mismatch: slot {slot}, post {post}")]
    NamespaceMismatch {
        /// Namespace of the addressed pin slot.
        slot: String,
        /// Namespace stored on the post.
        post: String,
    },

    /// Pin target is tombstoned or not owned by the caller.
    #[error("invalid pin owner: post {id}")]
    InvalidOwner {
        /// The rejected pin target.
        id: u64,
    },

    /// The pin slot already holds a post.
    #[error("already pinned")]
    AlreadyPinned,

    /// The pin slot holds nothing.
    #[error("nothing pinned")]
    NothingPinned,

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
