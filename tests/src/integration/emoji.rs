//! # Emoji Reaction Scenarios
//!
//! Open reactions against a live registry: anyone who pays the per-kind
//! price can react until the domain expires. The domain owner plays no
//! special role here.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use da_01_domain_oracle::adapters::registry::DEFAULT_DURATION_SECS;
    use da_01_domain_oracle::adapters::InMemoryRegistry;
    use da_04_emoji_reactions::domain::entities::EmojiReaction;
    use da_04_emoji_reactions::errors::EmojiError;
    use da_04_emoji_reactions::ports::inbound::EmojiApi;
    use da_04_emoji_reactions::service::{EmojiService, EmojiServiceConfig};
    use shared_types::{Address, DomainName, U256};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE: Address = Address::new([0xA1; 20]);
    const BOB: Address = Address::new([0xB2; 20]);
    const JOHN: Address = Address::new([0x10; 20]);
    const ADMIN: Address = Address::new([0xAD; 20]);
    const REVENUE: Address = Address::new([0xEE; 20]);

    fn setup() -> (
        Arc<InMemoryRegistry>,
        EmojiService<InMemoryRegistry>,
        DomainName,
    ) {
        let registry = Arc::new(InMemoryRegistry::new());
        let service = EmojiService::new(
            registry.clone(),
            EmojiServiceConfig {
                admin: ADMIN,
                revenue_account: REVENUE,
                prices: HashMap::from([
                    (0, U256::from(1u64)),
                    (1, U256::from(10u64)),
                    (2, U256::from(100u64)),
                ]),
                ..EmojiServiceConfig::default()
            },
        );
        let domain = DomainName::from("test.country");
        registry.register(&domain, ALICE);
        (registry, service, domain)
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn test_reactions_from_many_accounts_accumulate_in_order() {
        let (_, service, domain) = setup();

        service
            .add_reaction(ALICE, &domain, 0, U256::from(1u64))
            .await
            .unwrap();
        service
            .add_reaction(BOB, &domain, 2, U256::from(100u64))
            .await
            .unwrap();
        service
            .add_reaction(JOHN, &domain, 0, U256::from(1u64))
            .await
            .unwrap();

        assert_eq!(
            service.reactions(&domain).await,
            vec![
                EmojiReaction {
                    kind: 0,
                    reactor: ALICE
                },
                EmojiReaction {
                    kind: 2,
                    reactor: BOB
                },
                EmojiReaction {
                    kind: 0,
                    reactor: JOHN
                },
            ]
        );
        assert_eq!(service.collected().await, U256::from(102u64));
    }

    #[tokio::test]
    async fn test_price_changes_apply_to_later_reactions() {
        let (_, service, domain) = setup();

        service
            .add_reaction(BOB, &domain, 1, U256::from(10u64))
            .await
            .unwrap();

        service
            .set_reaction_price(ADMIN, 1, U256::from(25u64))
            .await
            .unwrap();

        assert_eq!(
            service
                .add_reaction(BOB, &domain, 1, U256::from(10u64))
                .await
                .unwrap_err(),
            EmojiError::IncorrectPayment {
                required: U256::from(25u64),
                provided: U256::from(10u64),
            }
        );
        service
            .add_reaction(BOB, &domain, 1, U256::from(25u64))
            .await
            .unwrap();
        assert_eq!(service.reaction_count(&domain).await, 2);
    }

    #[tokio::test]
    async fn test_expired_domain_rejects_new_reactions_keeps_old() {
        let (registry, service, domain) = setup();
        service
            .add_reaction(BOB, &domain, 0, U256::from(1u64))
            .await
            .unwrap();

        registry.advance_time(DEFAULT_DURATION_SECS + 1);

        assert_eq!(
            service
                .add_reaction(BOB, &domain, 0, U256::from(1u64))
                .await
                .unwrap_err(),
            EmojiError::DomainExpired
        );
        assert_eq!(service.reaction_count(&domain).await, 1);
    }

    #[tokio::test]
    async fn test_unregistered_domain_reads_as_expired() {
        let (_, service, _) = setup();
        let ghost = DomainName::from("ghost.country");

        assert_eq!(
            service
                .add_reaction(BOB, &ghost, 0, U256::from(1u64))
                .await
                .unwrap_err(),
            EmojiError::DomainExpired
        );
        assert!(service.reactions(&ghost).await.is_empty());
    }

    #[tokio::test]
    async fn test_fee_pipeline_end_to_end() {
        let (_, service, domain) = setup();
        service
            .add_reaction(BOB, &domain, 2, U256::from(100u64))
            .await
            .unwrap();

        assert_eq!(
            service.withdraw(BOB).await.unwrap_err(),
            EmojiError::NotAuthorized
        );
        assert_eq!(service.withdraw(REVENUE).await.unwrap(), U256::from(100u64));
        assert_eq!(service.collected().await, U256::zero());
    }
}
