//! # Vanity URL Scenarios
//!
//! Alias-keyed records under the same two-factor gate as posts, plus the
//! fee pipeline and the alias-reuse behavior deletion enables.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use da_01_domain_oracle::adapters::InMemoryRegistry;
    use da_03_vanity_urls::errors::VanityUrlError;
    use da_03_vanity_urls::ports::inbound::VanityUrlApi;
    use da_03_vanity_urls::service::{VanityUrlService, VanityUrlServiceConfig};
    use shared_types::{Address, DomainName, U256};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE: Address = Address::new([0xA1; 20]);
    const BOB: Address = Address::new([0xB2; 20]);
    const ADMIN: Address = Address::new([0xAD; 20]);
    const REVENUE: Address = Address::new([0xEE; 20]);

    fn fee() -> U256 {
        U256::from(500u64)
    }

    fn setup() -> (
        Arc<InMemoryRegistry>,
        VanityUrlService<InMemoryRegistry>,
        DomainName,
    ) {
        let registry = Arc::new(InMemoryRegistry::new());
        let service = VanityUrlService::new(
            registry.clone(),
            VanityUrlServiceConfig {
                admin: ADMIN,
                revenue_account: REVENUE,
                add_price: fee(),
                ..VanityUrlServiceConfig::default()
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
    async fn test_full_alias_lifecycle() {
        let (_, service, domain) = setup();

        service
            .add_url(ALICE, &domain, "home", "https://a.example", U256::from(2), fee())
            .await
            .unwrap();
        service
            .add_url(ALICE, &domain, "blog", "https://b.example", U256::from(3), fee())
            .await
            .unwrap();

        assert_eq!(service.alias_count(&domain).await, 2);
        assert_eq!(
            service.aliases(&domain).await,
            vec!["home".to_string(), "blog".to_string()]
        );

        // alias collision
        assert_eq!(
            service
                .add_url(ALICE, &domain, "home", "https://c.example", U256::zero(), fee())
                .await
                .unwrap_err(),
            VanityUrlError::AliasExists {
                alias: "home".to_string()
            }
        );

        // update keeps the owner, overwrites url and price
        service
            .update_url(ALICE, &domain, "home", "https://a2.example", U256::from(9))
            .await
            .unwrap();
        let record = service.url(&domain, "home").await.unwrap();
        assert_eq!(record.url, "https://a2.example");
        assert_eq!(record.price, U256::from(9));
        assert_eq!(record.owner, ALICE);

        // deletion frees the alias for anyone to re-register
        service.delete_url(ALICE, &domain, "home").await.unwrap();
        assert_eq!(service.aliases(&domain).await, vec!["blog".to_string()]);
        service
            .add_url(ALICE, &domain, "home", "https://d.example", U256::zero(), fee())
            .await
            .unwrap();
        assert_eq!(service.alias_count(&domain).await, 2);
    }

    #[tokio::test]
    async fn test_registry_transfer_alone_moves_nothing() {
        let (registry, service, domain) = setup();
        service
            .add_url(ALICE, &domain, "home", "u", U256::zero(), fee())
            .await
            .unwrap();

        registry.transfer(&domain, BOB);

        assert_eq!(
            service
                .update_url(ALICE, &domain, "home", "u2", U256::zero())
                .await
                .unwrap_err(),
            VanityUrlError::NotDomainOwner
        );
        assert_eq!(
            service.delete_url(BOB, &domain, "home").await.unwrap_err(),
            VanityUrlError::NotUrlOwner {
                alias: "home".to_string()
            }
        );
        assert_eq!(service.url(&domain, "home").await.unwrap().owner, ALICE);
    }

    #[tokio::test]
    async fn test_domain_sale_choreography() {
        let (registry, service, domain) = setup();
        service
            .add_url(ALICE, &domain, "home", "u", U256::zero(), fee())
            .await
            .unwrap();

        service
            .transfer_url_ownership(ALICE, &domain, BOB)
            .await
            .unwrap();
        registry.transfer(&domain, BOB);

        service
            .update_url(BOB, &domain, "home", "u2", U256::zero())
            .await
            .unwrap();
        service.delete_url(BOB, &domain, "home").await.unwrap();
        assert_eq!(service.alias_count(&domain).await, 0);
    }

    #[tokio::test]
    async fn test_expiry_blocks_writes_but_not_reads() {
        let (registry, service, domain) = setup();
        service
            .add_url(ALICE, &domain, "home", "u", U256::zero(), fee())
            .await
            .unwrap();

        registry.advance_time(
            da_01_domain_oracle::adapters::registry::DEFAULT_DURATION_SECS + 1,
        );

        assert_eq!(
            service
                .add_url(ALICE, &domain, "blog", "u", U256::zero(), fee())
                .await
                .unwrap_err(),
            VanityUrlError::DomainExpired
        );
        assert!(service.url(&domain, "home").await.is_some());
        assert_eq!(service.alias_count(&domain).await, 1);
    }

    #[tokio::test]
    async fn test_fee_pipeline_end_to_end() {
        let (_, service, domain) = setup();

        service
            .add_url(ALICE, &domain, "a", "u", U256::zero(), fee())
            .await
            .unwrap();
        service
            .add_url(ALICE, &domain, "b", "u", U256::zero(), fee())
            .await
            .unwrap();
        assert_eq!(service.collected().await, fee() * 2u64);

        assert_eq!(
            service.withdraw(BOB).await.unwrap_err(),
            VanityUrlError::NotAuthorized
        );
        assert_eq!(service.withdraw(ADMIN).await.unwrap(), fee() * 2u64);
        assert_eq!(service.collected().await, U256::zero());
    }
}
