//! # Domain Entities
//!
//! A reaction is a `(kind, reactor)` pair; the per-domain book is an
//! append-only list in arrival order.

use serde::{Deserialize, Serialize};
use shared_types::Address;

// =============================================================================
// EMOJI REACTION
// =============================================================================

/// A single recorded reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiReaction {
    /// Reaction kind, an opaque small integer chosen by the deployment.
    pub kind: u8,
    /// Account that paid for the reaction.
    pub reactor: Address,
}

// =============================================================================
// REACTION BOOK (per-domain state)
// =============================================================================

/// Per-domain reaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionBook {
    reactions: Vec<EmojiReaction>,
}

impl ReactionBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reaction.
    pub fn add(&mut self, kind: u8, reactor: Address) {
        self.reactions.push(EmojiReaction { kind, reactor });
    }

    /// All reactions in arrival order.
    #[must_use]
    pub fn reactions(&self) -> &[EmojiReaction] {
        &self.reactions
    }

    /// Number of recorded reactions.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.reactions.len() as u64
    }
}

// =============================================================================
// TESTS
// =============================================================================
