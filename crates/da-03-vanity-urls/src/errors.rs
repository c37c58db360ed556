//! # Error Types
//!
//! Failure taxonomy for vanity URL operations.

use shared_types::U256;
use thiserror::Error;

/// Errors returned by vanity URL operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VanityUrlError {
    /// Caller is not the domain's current registry owner.
    #[error("only domain owner")]
    NotDomainOwner,

    /// The domain's registration has lapsed.
    #[error("expired domain")]
    DomainExpired,

    /// Caller does not own the addressed record.
    #[error("only url owner: {alias}")]
    NotUrlOwner {
        /// The offending alias.
        alias: String,
    },

    /// No record exists under the alias.
    #[error("url does not exist: {alias}")]
    NotExist {
        /// The unknown alias.
        alias: String,
    },

    /// A record already exists under the alias.
    #[error("url already exists: {alias}")]
    AliasExists {
        /// The taken alias.
        alias: String,
    },

    /// The supplied alias was empty.
    #[error("empty alias")]
    EmptyAlias,

    /// The supplied URL was empty.
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
