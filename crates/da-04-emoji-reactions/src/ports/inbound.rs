//! # Driving Ports (API - Inbound)
//!
//! The operations the emoji reaction subsystem exposes to callers.

use crate::domain::entities::EmojiReaction;
use crate::errors::EmojiError;
use async_trait::async_trait;
use shared_types::{Address, DomainName, U256};

/// Public API of the emoji reaction subsystem.
#[async_trait]
pub trait EmojiApi: Send + Sync {
    /// Records a reaction of `kind` to `domain`, paid for by `caller`.
    ///
    /// Open to any caller while the domain is live; requires exact payment
    /// of the kind's configured price. Unconfigured kinds are free.
    async fn add_reaction(
        &self,
        caller: Address,
        domain: &DomainName,
        kind: u8,
        payment: U256,
    ) -> Result<(), EmojiError>;

    /// Reactions recorded under `domain` in arrival order. Reads never gate
    /// on expiry.
    async fn reactions(&self, domain: &DomainName) -> Vec<EmojiReaction>;

    /// Number of reactions recorded under `domain`.
    async fn reaction_count(&self, domain: &DomainName) -> u64;
}
