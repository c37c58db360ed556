//! # Post Service
//!
//! Orchestrates the post ledger behind the `PostApi` port: applies the
//! two-factor ownership gate against the Domain Oracle, runs the fee gate,
//! mutates per-domain books, and publishes events.
//!
//! ## Execution Model
//!
//! Every mutating call takes the state write lock for its whole body, so
//! operations execute serially and atomically: a failed call returns before
//! any book was touched, and no caller ever observes a half-applied
//! mutation. Fee crediting is the last effect of a successful creation.

use crate::domain::entities::{PostBook, PostView};
use crate::errors::PostError;
use crate::events::PostEvent;
use crate::ports::inbound::PostApi;

use async_trait::async_trait;
use da_01_domain_oracle::ports::DomainOracle;
use shared_types::{Address, DomainKey, DomainName, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument, warn};

/// Post service configuration.
#[derive(Debug, Clone)]
pub struct PostServiceConfig {
    /// Administrative account (price/pause/revenue management).
    pub admin: Address,
    /// Account entitled to withdraw collected fees.
    pub revenue_account: Address,
    /// Fixed price per `add_posts` call. Zero means free.
    pub add_price: U256,
    /// Event channel capacity.
    pub event_capacity: usize,
}

impl Default for PostServiceConfig {
    fn default() -> Self {
        Self {
            admin: Address::ZERO,
            revenue_account: Address::ZERO,
            add_price: U256::zero(),
            event_capacity: 64,
        }
    }
}

/// Mutable service state, guarded by one lock.
#[derive(Debug)]
struct PostState {
    /// Per-domain books, keyed by the domain's ledger key.
    books: HashMap<DomainKey, PostBook>,
    /// Account entitled to withdraw collected fees.
    revenue_account: Address,
    /// Fixed price per `add_posts` call.
    add_price: U256,
    /// Fees collected and not yet withdrawn.
    collected: U256,
    /// Pause flag; all mutations fail while set.
    paused: bool,
}

/// The main post ledger service.
pub struct PostService<O: DomainOracle> {
    /// Domain ownership/expiry source of truth.
    oracle: Arc<O>,
    /// Administrative account, fixed at construction.
    admin: Address,
    /// Guarded mutable state.
    state: RwLock<PostState>,
    /// Event channel.
    events: broadcast::Sender<PostEvent>,
}

impl<O: DomainOracle> PostService<O> {
    /// Creates a new post service over the given oracle.
    pub fn new(oracle: Arc<O>, config: PostServiceConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            oracle,
            admin: config.admin,
            state: RwLock::new(PostState {
                books: HashMap::new(),
                revenue_account: config.revenue_account,
                add_price: config.add_price,
                collected: U256::zero(),
                paused: false,
            }),
            events,
        }
    }

    /// Subscribes to service events.
    pub fn subscribe(&self) -> broadcast::Receiver<PostEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: PostEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    /// Domain-owner gate: caller must be the registry owner of a live domain.
    async fn ensure_domain_owner(
        &self,
        domain: &DomainName,
        caller: Address,
    ) -> Result<(), PostError> {
        if self.oracle.owner_of(domain).await != caller {
            warn!(domain = %domain, caller = %caller, "rejected: not domain owner");
            return Err(PostError::NotDomainOwner);
        }
        if self.oracle.is_expired(domain).await {
            warn!(domain = %domain, "rejected: expired domain");
            return Err(PostError::DomainExpired);
        }
        Ok(())
    }

    fn ensure_admin(&self, caller: Address) -> Result<(), PostError> {
        if caller != self.admin {
            return Err(PostError::NotAuthorized);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Admin surface
    // -------------------------------------------------------------------------

    /// Sets the fixed creation price. Admin only.
    pub async fn set_add_price(&self, caller: Address, price: U256) -> Result<(), PostError> {
        self.ensure_admin(caller)?;
        self.state.write().await.add_price = price;
        Ok(())
    }

    /// Sets the revenue account. Admin only.
    pub async fn set_revenue_account(
        &self,
        caller: Address,
        account: Address,
    ) -> Result<(), PostError> {
        self.ensure_admin(caller)?;
        self.state.write().await.revenue_account = account;
        Ok(())
    }

    /// Pauses all mutating operations. Admin only.
    pub async fn pause(&self, caller: Address) -> Result<(), PostError> {
        self.ensure_admin(caller)?;
        self.state.write().await.paused = true;
        info!("service paused");
        Ok(())
    }

    /// Resumes mutating operations. Admin only.
    pub async fn unpause(&self, caller: Address) -> Result<(), PostError> {
        self.ensure_admin(caller)?;
        self.state.write().await.paused = false;
        info!("service unpaused");
        Ok(())
    }

    /// Whether the service is paused.
    pub async fn is_paused(&self) -> bool {
        self.state.read().await.paused
    }

    /// Current creation price.
    pub async fn add_price(&self) -> U256 {
        self.state.read().await.add_price
    }

    /// Current revenue account.
    pub async fn revenue_account(&self) -> Address {
        self.state.read().await.revenue_account
    }

    /// Fees collected and not yet withdrawn.
    pub async fn collected(&self) -> U256 {
        self.state.read().await.collected
    }

    /// Drains collected fees, returning the amount for the revenue account.
    ///
    /// Callable by the admin or the revenue account. The actual fund
    /// movement happens outside this service.
    pub async fn withdraw(&self, caller: Address) -> Result<U256, PostError> {
        let mut state = self.state.write().await;
        if caller != self.admin && caller != state.revenue_account {
            return Err(PostError::NotAuthorized);
        }
        let amount = state.collected;
        state.collected = U256::zero();
        let recipient = state.revenue_account;
        drop(state);
        info!(amount = %amount, recipient = %recipient, "revenue withdrawn");
        self.emit(PostEvent::RevenueWithdrawn { recipient, amount });
        Ok(amount)
    }

    /// Bulk-imports legacy posts under `domain`. Admin only.
    ///
    /// Imports are assigned to the domain's current registry owner with an
    /// empty namespace and pay no fee.
    #[instrument(skip(self, urls), fields(domain = %domain))]
    pub async fn migrate_posts(
        &self,
        caller: Address,
        domain: &DomainName,
        urls: Vec<String>,
    ) -> Result<Vec<u64>, PostError> {
        self.ensure_admin(caller)?;
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        let owner = self.oracle.owner_of(domain).await;
        if owner.is_zero() {
            return Err(PostError::NotDomainOwner);
        }
        let book = state.books.entry(domain.key()).or_default();
        let ids = book.add(&urls, "", owner)?;
        drop(state);
        info!(count = ids.len(), owner = %owner, "migrated legacy posts");
        self.emit(PostEvent::PostsMigrated {
            domain: domain.clone(),
            count: ids.len() as u64,
            owner,
        });
        Ok(ids)
    }
}

#[async_trait]
impl<O: DomainOracle> PostApi for PostService<O> {
    #[instrument(skip(self, urls), fields(domain = %domain, caller = %caller))]
    async fn add_posts(
        &self,
        caller: Address,
        domain: &DomainName,
        urls: Vec<String>,
        namespace: &str,
        payment: U256,
    ) -> Result<Vec<u64>, PostError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        if urls.iter().any(String::is_empty) {
            return Err(PostError::EmptyUrl);
        }
        if payment != state.add_price {
            return Err(PostError::IncorrectPayment {
                required: state.add_price,
                provided: payment,
            });
        }
        let book = state.books.entry(domain.key()).or_default();
        let ids = book.add(&urls, namespace, caller)?;
        // fee collection is the last effect, after all validation
        state.collected = state.collected.saturating_add(payment);
        drop(state);
        info!(ids = ?ids, "posts added");
        self.emit(PostEvent::PostsAdded {
            domain: domain.clone(),
            ids: ids.clone(),
            owner: caller,
        });
        Ok(ids)
    }

    #[instrument(skip(self), fields(domain = %domain, caller = %caller))]
    async fn delete_posts(
        &self,
        caller: Address,
        domain: &DomainName,
        ids: &[u64],
    ) -> Result<(), PostError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let Some(&first) = ids.first() else {
            return Ok(());
        };
        let book = state
            .books
            .get_mut(&domain.key())
            .ok_or(PostError::InvalidId { id: first })?;
        book.delete(ids, caller)?;
        drop(state);
        info!(ids = ?ids, "posts deleted");
        self.emit(PostEvent::PostsDeleted {
            domain: domain.clone(),
            ids: ids.to_vec(),
        });
        Ok(())
    }

    #[instrument(skip(self, new_url), fields(domain = %domain, caller = %caller, id))]
    async fn update_post(
        &self,
        caller: Address,
        domain: &DomainName,
        id: u64,
        new_url: &str,
    ) -> Result<(), PostError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let book = state
            .books
            .get_mut(&domain.key())
            .ok_or(PostError::InvalidId { id })?;
        book.update(id, new_url, caller)?;
        drop(state);
        debug!(id, "post updated");
        self.emit(PostEvent::PostUpdated {
            domain: domain.clone(),
            id,
        });
        Ok(())
    }

    #[instrument(skip(self), fields(domain = %domain, caller = %caller, all))]
    async fn transfer_post_ownership(
        &self,
        caller: Address,
        domain: &DomainName,
        new_owner: Address,
        all: bool,
        namespace: &str,
    ) -> Result<(), PostError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let Some(book) = state.books.get_mut(&domain.key()) else {
            // nothing to move; transfers are idempotent no-ops on empty books
            return Ok(());
        };
        let moved = book.transfer(caller, new_owner, all, namespace);
        drop(state);
        if moved.is_empty() {
            debug!("ownership transfer matched no posts");
            return Ok(());
        }
        info!(count = moved.len(), to = %new_owner, "post ownership transferred");
        self.emit(PostEvent::OwnershipTransferred {
            domain: domain.clone(),
            from: caller,
            to: new_owner,
            ids: moved,
        });
        Ok(())
    }

    #[instrument(skip(self), fields(domain = %domain, caller = %caller, id))]
    async fn pin_post(
        &self,
        caller: Address,
        domain: &DomainName,
        namespace: &str,
        id: u64,
    ) -> Result<(), PostError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let book = state
            .books
            .get_mut(&domain.key())
            .ok_or(PostError::InvalidId { id })?;
        book.pin(caller, namespace, id)?;
        drop(state);
        info!(id, namespace, "post pinned");
        self.emit(PostEvent::PostPinned {
            domain: domain.clone(),
            owner: caller,
            namespace: namespace.to_string(),
            id,
        });
        Ok(())
    }

    #[instrument(skip(self), fields(domain = %domain, caller = %caller))]
    async fn unpin_post(
        &self,
        caller: Address,
        domain: &DomainName,
        namespace: &str,
    ) -> Result<(), PostError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(PostError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let book = state
            .books
            .get_mut(&domain.key())
            .ok_or(PostError::NothingPinned)?;
        let id = book.unpin(caller, namespace)?;
        drop(state);
        info!(id, namespace, "post unpinned");
        self.emit(PostEvent::PostUnpinned {
            domain: domain.clone(),
            owner: caller,
            namespace: namespace.to_string(),
            id,
        });
        Ok(())
    }

    async fn posts(&self, domain: &DomainName) -> Vec<PostView> {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .map(PostBook::views)
            .unwrap_or_default()
    }

    async fn post_count(&self, domain: &DomainName) -> u64 {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .map_or(0, PostBook::active_count)
    }

    async fn pinned_post(
        &self,
        domain: &DomainName,
        owner: Address,
        namespace: &str,
    ) -> Option<u64> {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .and_then(|book| book.live_pin(owner, namespace))
    }
}

// =============================================================================
// TESTS
// =============================================================================
