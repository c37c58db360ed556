//! # Emoji Reaction Service
//!
//! Orchestrates reaction books behind the `EmojiApi` port: expiry gate,
//! per-kind fee gate, append, event publication. Same execution model as the
//! other asset services: one write lock per mutating call, fee crediting
//! last.

use crate::domain::entities::{EmojiReaction, ReactionBook};
use crate::errors::EmojiError;
use crate::events::ReactionEvent;
use crate::ports::inbound::EmojiApi;

use async_trait::async_trait;
use da_01_domain_oracle::ports::DomainOracle;
use shared_types::{Address, DomainKey, DomainName, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, instrument, warn};

/// Emoji reaction service configuration.
#[derive(Debug, Clone)]
pub struct EmojiServiceConfig {
    /// Administrative account.
    pub admin: Address,
    /// Account entitled to withdraw collected fees.
    pub revenue_account: Address,
    /// Initial per-kind price table. Kinds absent from the table are free.
    pub prices: HashMap<u8, U256>,
    /// Event channel capacity.
    pub event_capacity: usize,
}

impl Default for EmojiServiceConfig {
    fn default() -> Self {
        Self {
            admin: Address::ZERO,
            revenue_account: Address::ZERO,
            prices: HashMap::new(),
            event_capacity: 64,
        }
    }
}

/// Mutable service state, guarded by one lock.
#[derive(Debug)]
struct ReactionState {
    books: HashMap<DomainKey, ReactionBook>,
    prices: HashMap<u8, U256>,
    revenue_account: Address,
    collected: U256,
    paused: bool,
}

/// The main emoji reaction service.
pub struct EmojiService<O: DomainOracle> {
    oracle: Arc<O>,
    admin: Address,
    state: RwLock<ReactionState>,
    events: broadcast::Sender<ReactionEvent>,
}

impl<O: DomainOracle> EmojiService<O> {
    /// Creates a new emoji reaction service over the given oracle.
    pub fn new(oracle: Arc<O>, config: EmojiServiceConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            oracle,
            admin: config.admin,
            state: RwLock::new(ReactionState {
                books: HashMap::new(),
                prices: config.prices,
                revenue_account: config.revenue_account,
                collected: U256::zero(),
                paused: false,
            }),
            events,
        }
    }

    /// Subscribes to service events.
    pub fn subscribe(&self) -> broadcast::Receiver<ReactionEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: ReactionEvent) {
        let _ = self.events.send(event);
    }

    fn ensure_admin(&self, caller: Address) -> Result<(), EmojiError> {
        if caller != self.admin {
            return Err(EmojiError::NotAuthorized);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Admin surface
    // -------------------------------------------------------------------------

    /// Sets the price of a reaction kind. Admin only.
    pub async fn set_reaction_price(
        &self,
        caller: Address,
        kind: u8,
        price: U256,
    ) -> Result<(), EmojiError> {
        self.ensure_admin(caller)?;
        self.state.write().await.prices.insert(kind, price);
        Ok(())
    }

    /// Current price of a reaction kind. Unconfigured kinds are free.
    pub async fn reaction_price(&self, kind: u8) -> U256 {
        self.state
            .read()
            .await
            .prices
            .get(&kind)
            .copied()
            .unwrap_or_default()
    }

    /// Sets the revenue account. Admin only.
    pub async fn set_revenue_account(
        &self,
        caller: Address,
        account: Address,
    ) -> Result<(), EmojiError> {
        self.ensure_admin(caller)?;
        self.state.write().await.revenue_account = account;
        Ok(())
    }

    /// Pauses all mutating operations. Admin only.
    pub async fn pause(&self, caller: Address) -> Result<(), EmojiError> {
        self.ensure_admin(caller)?;
        self.state.write().await.paused = true;
        info!("service paused");
        Ok(())
    }

    /// Resumes mutating operations. Admin only.
    pub async fn unpause(&self, caller: Address) -> Result<(), EmojiError> {
        self.ensure_admin(caller)?;
        self.state.write().await.paused = false;
        info!("service unpaused");
        Ok(())
    }

    /// Whether the service is paused.
    pub async fn is_paused(&self) -> bool {
        self.state.read().await.paused
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
    pub async fn withdraw(&self, caller: Address) -> Result<U256, EmojiError> {
        let mut state = self.state.write().await;
        if caller != self.admin && caller != state.revenue_account {
            return Err(EmojiError::NotAuthorized);
        }
        let amount = state.collected;
        state.collected = U256::zero();
        let recipient = state.revenue_account;
        drop(state);
        info!(amount = %amount, recipient = %recipient, "revenue withdrawn");
        self.emit(ReactionEvent::RevenueWithdrawn { recipient, amount });
        Ok(amount)
    }
}

#[async_trait]
impl<O: DomainOracle> EmojiApi for EmojiService<O> {
    #[instrument(skip(self), fields(domain = %domain, caller = %caller, kind))]
    async fn add_reaction(
        &self,
        caller: Address,
        domain: &DomainName,
        kind: u8,
        payment: U256,
    ) -> Result<(), EmojiError> {
        let mut state = self.state.write().await;
        if state.paused {
            return Err(EmojiError::Paused);
        }
        // no owner gate: anyone may react while the domain is live
        if self.oracle.is_expired(domain).await {
            warn!(domain = %domain, "rejected: expired domain");
            return Err(EmojiError::DomainExpired);
        }
        let required = state.prices.get(&kind).copied().unwrap_or_default();
        if payment != required {
            return Err(EmojiError::IncorrectPayment {
                required,
                provided: payment,
            });
        }
        state.books.entry(domain.key()).or_default().add(kind, caller);
        // fee collection is the last effect, after all validation
        state.collected = state.collected.saturating_add(payment);
        drop(state);
        info!(kind, "reaction added");
        self.emit(ReactionEvent::ReactionAdded {
            domain: domain.clone(),
            kind,
            reactor: caller,
        });
        Ok(())
    }

    async fn reactions(&self, domain: &DomainName) -> Vec<EmojiReaction> {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .map(|book| book.reactions().to_vec())
            .unwrap_or_default()
    }

    async fn reaction_count(&self, domain: &DomainName) -> u64 {
        self.state
            .read()
            .await
            .books
            .get(&domain.key())
            .map_or(0, ReactionBook::count)
    }
}

// =============================================================================
// TESTS
// =============================================================================
