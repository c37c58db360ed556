//! # Vanity URL Service
//!
//! Orchestrates alias books behind the `VanityUrlApi` port: two-factor
//! ownership gate against the Domain Oracle, fee gate, per-domain mutation,
//! event publication. Same execution model as the post service: one write
//! lock per mutating call, fee crediting last.

use crate::domain::entities::{AliasBook, VanityUrl};
use crate::errors::VanityUrlError;
use crate::events::UrlEvent;
use crate::ports::inbound::VanityUrlApi;

use async_trait::async_trait;
use da_01_domain_oracle::ports::DomainOracle;
use shared_types::{Address, DomainKey, DomainName, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument, warn};

/// Vanity URL service configuration.
#[derive(Debug, Clone)]
pub struct VanityUrlServiceConfig {
    /// Administrative account.
    pub admin: Address,
    /// Account entitled to withdraw collected fees.
    pub revenue_account: Address,
    /// Fixed registration price per `add_url` call. Zero means free.
    pub add_price: U256,
    /// Event channel capacity.
    pub event_capacity: usize,
}

impl Default for VanityUrlServiceConfig {
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
struct UrlState {
    books: HashMap<DomainKey, AliasBook>,
    revenue_account: Address,
    add_price: U256,
    collected: U256,
    paused: bool,
}

/// The main vanity URL service.
pub struct VanityUrlService<O: DomainOracle> {
    oracle: Arc<O>,
    admin: Address,
    state: RwLock<UrlState>,
    events: broadcast::Sender<UrlEvent>,
}

impl<O: DomainOracle> VanityUrlService<O> {
    /// Creates a new vanity URL service over the given oracle.
    pub fn new(oracle: Arc<O>, config: VanityUrlServiceConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            oracle,
            admin: config.admin,
            state: RwLock::new(UrlState {
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
    pub fn subscribe(&self) -> broadcast::Receiver<UrlEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: UrlEvent) {
        let _ = self.events.send(event);
    }

    async fn ensure_domain_owner(
        &self,
        domain: &DomainName,
        caller: Address,
    ) -> Result<(), VanityUrlError> {
        if self.oracle.owner_of(domain).await != caller {
            warn!(domain = %domain, caller = %caller, "rejected: not domain owner");
            return Err(VanityUrlError::NotDomainOwner);
        }
        if self.oracle.is_expired(domain).await {
            warn!(domain = %domain, "rejected: expired domain");
            return Err(VanityUrlError::DomainExpired);
        }
        Ok(())
    }

    fn ensure_admin(&self, caller: Address) -> Result<(), VanityUrlError> {
        if caller != self.admin {
            return Err(VanityUrlError::NotAuthorized);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Admin surface
    // -------------------------------------------------------------------------

    /// Sets the fixed registration price. Admin only.
    pub async fn set_add_price(&self, caller: Address, price: U256) -> Result<(), VanityUrlError> {
        self.ensure_admin(caller)?;
        self.state.write().await.add_price = price;
        Ok(())
    }

    /// Sets the revenue account. Admin only.
    pub async fn set_revenue_account(
        &self,
        caller: Address,
        account: Address,
    ) -> Result<(), VanityUrlError> {
        self.ensure_admin(caller)?;
        self.state.write().await.revenue_account = account;
        Ok(())
    }

    /// Pauses all mutating operations. Admin only.
    pub async fn pause(&self, caller: Address) -> Result<(), VanityUrlError> {
        self.ensure_admin(caller)?;
        self.state.write().await.paused = true;
        info!("service paused");
        Ok(())
    }

    /// Resumes mutating operations. Admin only.
    pub async fn unpause(&self, caller: Address) -> Result<(), VanityUrlError> {
        self.ensure_admin(caller)?;
        self.state.write().await.paused = false;
        info!("service unpaused");
        Ok(())
    }

    /// Whether the service is paused.
    pub async fn is_paused(&self) -> bool {
        self.state.read().await.paused
    }

    /// Current registration price.
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

    /// Drains collected fees. Callable by the admin or the revenue account.
    pub async fn withdraw(&self, caller: Address) -> Result<U256, VanityUrlError> {
        let mut state = self.state.write().await;
        if caller != self.admin && caller != state.revenue_account {
            return Err(VanityUrlError::NotAuthorized);
        }
        let amount = state.collected;
        state.collected = U256::zero();
        let recipient = state.revenue_account;
        drop(state);
        info!(amount = %amount, recipient = %recipient, "revenue withdrawn");
        self.emit(UrlEvent::RevenueWithdrawn { recipient, amount });
        Ok(amount)
    }
}

#[async_trait]
impl<O: DomainOracle> VanityUrlApi for VanityUrlService<O> {
    #[instrument(skip(self, url), fields(domain = %domain, caller = %caller, alias))]
    async fn add_url(
        &self,
        caller: Address,
        domain: &DomainName,
        alias: &str,
        url: &str,
        price: U256,
        payment: U256,
    ) -> Result<(), VanityUrlError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(VanityUrlError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        if payment != state.add_price {
            return Err(VanityUrlError::IncorrectPayment {
                required: state.add_price,
                provided: payment,
            });
        }
        let book = state.books.entry(domain.key()).or_default();
        book.add(alias, url, price, caller)?;
        // fee collection is the last effect, after all validation
        state.collected = state.collected.saturating_add(payment);
        drop(state);
        info!(alias, "url added");
        self.emit(UrlEvent::UrlAdded {
            domain: domain.clone(),
            alias: alias.to_string(),
            owner: caller,
        });
        Ok(())
    }

    #[instrument(skip(self), fields(domain = %domain, caller = %caller, alias))]
    async fn delete_url(
        &self,
        caller: Address,
        domain: &DomainName,
        alias: &str,
    ) -> Result<(), VanityUrlError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(VanityUrlError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let book =
            state
                .books
                .get_mut(&domain.key())
                .ok_or_else(|| VanityUrlError::NotExist {
                    alias: alias.to_string(),
                })?;
        book.delete(alias, caller)?;
        drop(state);
        info!(alias, "url deleted");
        self.emit(UrlEvent::UrlDeleted {
            domain: domain.clone(),
            alias: alias.to_string(),
        });
        Ok(())
    }

    #[instrument(skip(self, new_url), fields(domain = %domain, caller = %caller, alias))]
    async fn update_url(
        &self,
        caller: Address,
        domain: &DomainName,
        alias: &str,
        new_url: &str,
        new_price: U256,
    ) -> Result<(), VanityUrlError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(VanityUrlError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let book =
            state
                .books
                .get_mut(&domain.key())
                .ok_or_else(|| VanityUrlError::NotExist {
                    alias: alias.to_string(),
                })?;
        book.update(alias, new_url, new_price, caller)?;
        drop(state);
        debug!(alias, "url updated");
        self.emit(UrlEvent::UrlUpdated {
            domain: domain.clone(),
            alias: alias.to_string(),
        });
        Ok(())
    }

    #[instrument(skip(self), fields(domain = %domain, caller = %caller))]
    async fn transfer_url_ownership(
        &self,
        caller: Address,
        domain: &DomainName,
        new_owner: Address,
    ) -> Result<(), VanityUrlError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(VanityUrlError::Paused);
        }
        self.ensure_domain_owner(domain, caller).await?;
        let Some(book) = state.books.get_mut(&domain.key()) else {
            return Ok(());
        };
        let moved = book.transfer(caller, new_owner);
        drop(state);
        if moved.is_empty() {
            debug!("ownership transfer matched no records");
            return Ok(());
        }
        info!(count = moved.len(), to = %new_owner, "url ownership transferred");
        self.emit(UrlEvent::OwnershipTransferred {
            domain: domain.clone(),
            from: caller,
            to: new_owner,
            aliases: moved,
        });
        Ok(())
    }

    async fn url(&self, domain: &DomainName, alias: &str) -> Option<VanityUrl> {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .and_then(|book| book.get(alias).cloned())
    }

    async fn aliases(&self, domain: &DomainName) -> Vec<String> {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .map(|book| book.names().to_vec())
            .unwrap_or_default()
    }

    async fn alias_count(&self, domain: &DomainName) -> u64 {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .map_or(0, AliasBook::count)
    }
}

// =============================================================================
// TESTS
// =============================================================================
