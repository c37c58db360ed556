//! # Domain Invariants
//!
//! Checkable statements about `PostBook` state. Tests assert these after
//! every interesting mutation sequence.

use crate::domain::entities::PostBook;

/// A detected invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `active_count` disagrees with the number of alive slots.
    ActiveCountMismatch {
        /// Stored counter value.
        counted: u64,
        /// Actual number of alive slots.
        actual: u64,
    },
    /// A slot's id does not equal its arena position.
    IdOutOfPlace {
        /// Arena index of the offending slot.
        index: u64,
        /// Id stored in the slot.
        id: u64,
    },
    /// A tombstoned slot still carries payload or owner data.
    DirtyTombstone {
        /// Id of the offending slot.
        id: u64,
    },
}

/// Checks that the stored alive counter matches the arena.
#[must_use]
pub fn check_active_count(book: &PostBook) -> Option<InvariantViolation> {
    let actual = book.raw_slots().iter().filter(|slot| slot.alive).count() as u64;
    (actual != book.active_count()).then(|| InvariantViolation::ActiveCountMismatch {
        counted: book.active_count(),
        actual,
    })
}

/// Checks that ids equal arena positions (stable, monotonic, never reused).
#[must_use]
pub fn check_id_stability(book: &PostBook) -> Option<InvariantViolation> {
    book.raw_slots()
        .iter()
        .enumerate()
        .find(|(index, slot)| *index as u64 != slot.id)
        .map(|(index, slot)| InvariantViolation::IdOutOfPlace {
            index: index as u64,
            id: slot.id,
        })
}

/// Checks that tombstoned slots are fully zeroed.
#[must_use]
pub fn check_tombstone_zeroing(book: &PostBook) -> Option<InvariantViolation> {
    book.raw_slots()
        .iter()
        .find(|slot| !slot.alive && !(slot.url.is_empty() && slot.namespace.is_empty() && slot.owner.is_zero()))
        .map(|slot| InvariantViolation::DirtyTombstone { id: slot.id })
}

/// Runs every book invariant, collecting all violations.
#[must_use]
pub fn check_all_invariants(book: &PostBook) -> Vec<InvariantViolation> {
    [
        check_active_count(book),
        check_id_stability(book),
        check_tombstone_zeroing(book),
    ]
    .into_iter()
    .flatten()
    .collect()
}

// =============================================================================
// TESTS
// =============================================================================
