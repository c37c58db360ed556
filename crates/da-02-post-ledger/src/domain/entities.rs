//! # Domain Entities
//!
//! The sparse, tombstoned post sequence and its per-domain book. All mutation
//! rules live here as pure functions over `PostBook`; the service layer adds
//! the oracle gate, locking, and events on top.

use crate::errors::PostError;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::{HashMap, HashSet};

// =============================================================================
// POST
// =============================================================================

/// A single post slot in a domain's ledger.
///
/// Slots are never removed or compacted. Deletion tombstones the slot:
/// `alive` flips to false and `url`, `namespace`, and `owner` are cleared to
/// their zero values, while `id` keeps marking the slot forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable id, equal to the slot's position in the arena.
    pub id: u64,
    /// Opaque URL payload. Empty once tombstoned.
    pub url: String,
    /// Caller-supplied namespace tag. May be empty.
    pub namespace: String,
    /// Current post owner. Set to the creator, changed only by transfer.
    pub owner: Address,
    /// Tombstone flag.
    pub alive: bool,
}

/// Read-only view of an alive post, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    /// Stable id.
    pub id: u64,
    /// URL payload.
    pub url: String,
    /// Namespace tag.
    pub namespace: String,
    /// Current owner.
    pub owner: Address,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            url: post.url.clone(),
            namespace: post.namespace.clone(),
            owner: post.owner,
        }
    }
}

// =============================================================================
// POST BOOK (per-domain state)
// =============================================================================

/// Per-domain ledger state: the post arena, the alive count, and the pin
/// slots. The next id is always the arena length, so ids stay monotonic and
/// are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBook {
    /// Post arena indexed by id.
    slots: Vec<Post>,
    /// Count of alive posts.
    active: u64,
    /// Pin slots: owner -> namespace -> pinned post id. A missing entry is
    /// the unpinned state; a present entry may still be stale (see
    /// `live_pin`).
    pins: HashMap<Address, HashMap<String, u64>>,
}

impl PostBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a slot, distinguishing never-assigned from tombstoned ids.
    fn slot(&self, id: u64) -> Result<&Post, PostError> {
        let slot = self
            .slots
            .get(usize::try_from(id).map_err(|_| PostError::InvalidId { id })?)
            .ok_or(PostError::InvalidId { id })?;
        if !slot.alive {
            return Err(PostError::NotExist { id });
        }
        Ok(slot)
    }

    /// Appends one post per URL, all owned by `owner` and tagged with
    /// `namespace`. Ids continue the domain's counter.
    ///
    /// # Errors
    ///
    /// `EmptyUrl` if any URL is empty; nothing is appended in that case.
    pub fn add(
        &mut self,
        urls: &[String],
        namespace: &str,
        owner: Address,
    ) -> Result<Vec<u64>, PostError> {
        if urls.iter().any(String::is_empty) {
            return Err(PostError::EmptyUrl);
        }
        let mut ids = Vec::with_capacity(urls.len());
        for url in urls {
            let id = self.slots.len() as u64;
            self.slots.push(Post {
                id,
                url: url.clone(),
                namespace: namespace.to_string(),
                owner,
                alive: true,
            });
            self.active += 1;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Tombstones the given posts.
    ///
    /// Every id is validated (in range, alive, owned by `caller`) before any
    /// slot is touched; an id repeated within one call counts as already
    /// dead. Mixed ownership is rejected per id, never pre-filtered.
    pub fn delete(&mut self, ids: &[u64], caller: Address) -> Result<(), PostError> {
        let mut seen = HashSet::new();
        for &id in ids {
            let slot = self.slot(id)?;
            if seen.contains(&id) {
                return Err(PostError::NotExist { id });
            }
            if slot.owner != caller {
                return Err(PostError::NotPostOwner { id });
            }
            seen.insert(id);
        }
        for &id in ids {
            let slot = &mut self.slots[id as usize];
            slot.alive = false;
            slot.url.clear();
            slot.namespace.clear();
            slot.owner = Address::ZERO;
            self.active -= 1;
        }
        Ok(())
    }

    /// Overwrites the URL of an alive post in place. Id and owner are
    /// unchanged.
    pub fn update(&mut self, id: u64, new_url: &str, caller: Address) -> Result<(), PostError> {
        let slot = self.slot(id)?;
        if slot.owner != caller {
            return Err(PostError::NotPostOwner { id });
        }
        if new_url.is_empty() {
            return Err(PostError::EmptyUrl);
        }
        self.slots[id as usize].url = new_url.to_string();
        Ok(())
    }

    /// Reassigns every alive post owned by `caller` (filtered by `namespace`
    /// unless `all`) to `new_owner`. Returns the moved ids; an empty result
    /// is not an error, which makes repeated transfers a no-op.
    pub fn transfer(
        &mut self,
        caller: Address,
        new_owner: Address,
        all: bool,
        namespace: &str,
    ) -> Vec<u64> {
        let mut moved = Vec::new();
        for slot in &mut self.slots {
            if slot.alive && slot.owner == caller && (all || slot.namespace == namespace) {
                slot.owner = new_owner;
                moved.push(slot.id);
            }
        }
        moved
    }

    /// Resolves the live pin for `(owner, namespace)`.
    ///
    /// A stored pin is stale once its post is tombstoned, re-owned, or no
    /// longer carries the slot's namespace; stale slots read as unpinned.
    #[must_use]
    pub fn live_pin(&self, owner: Address, namespace: &str) -> Option<u64> {
        let id = *self.pins.get(&owner)?.get(namespace)?;
        let slot = self.slots.get(id as usize)?;
        (slot.alive && slot.owner == owner && slot.namespace == namespace).then_some(id)
    }

    /// Pins `id` into the caller's slot for `namespace`.
    pub fn pin(&mut self, caller: Address, namespace: &str, id: u64) -> Result<(), PostError> {
        let slot = match self.slot(id) {
            Ok(slot) => slot,
            Err(PostError::NotExist { id }) => return Err(PostError::InvalidOwner { id }),
            Err(err) => return Err(err),
        };
        if slot.owner != caller {
            return Err(PostError::InvalidOwner { id });
        }
        if slot.namespace != namespace {
            return Err(PostError::NamespaceMismatch {
                slot: namespace.to_string(),
                post: slot.namespace.clone(),
            });
        }
        if self.live_pin(caller, namespace).is_some() {
            return Err(PostError::AlreadyPinned);
        }
        self.pins
            .entry(caller)
            .or_default()
            .insert(namespace.to_string(), id);
        Ok(())
    }

    /// Clears the caller's pin slot for `namespace`, returning the id that
    /// was pinned. A stale slot reads as unpinned and fails the same way an
    /// empty one does.
    pub fn unpin(&mut self, caller: Address, namespace: &str) -> Result<u64, PostError> {
        let id = self
            .live_pin(caller, namespace)
            .ok_or(PostError::NothingPinned)?;
        if let Some(slots) = self.pins.get_mut(&caller) {
            slots.remove(namespace);
        }
        Ok(id)
    }

    /// The alive subsequence in original insertion order.
    #[must_use]
    pub fn views(&self) -> Vec<PostView> {
        self.slots
            .iter()
            .filter(|slot| slot.alive)
            .map(PostView::from)
            .collect()
    }

    /// Count of alive posts.
    #[must_use]
    pub fn active_count(&self) -> u64 {
        self.active
    }

    /// Count of ids ever assigned, tombstones included.
    #[must_use]
    pub fn assigned_count(&self) -> u64 {
        self.slots.len() as u64
    }

    /// Raw slot access for invariant checks.
    #[must_use]
    pub(crate) fn raw_slots(&self) -> &[Post] {
        &self.slots
    }
}

// =============================================================================
// TESTS
// =============================================================================
