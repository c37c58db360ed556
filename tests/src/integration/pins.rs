//! # Pin Registry Scenarios
//!
//! One pin per `(domain, owner, namespace)`. Pins are never eagerly cleaned:
//! a pin left behind by deletion, transfer or retagging simply stops
//! resolving.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use da_01_domain_oracle::adapters::InMemoryRegistry;
    use da_02_post_ledger::errors::PostError;
    use da_02_post_ledger::ports::inbound::PostApi;
    use da_02_post_ledger::service::{PostService, PostServiceConfig};
    use shared_types::{Address, DomainName, U256};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE: Address = Address::new([0xA1; 20]);
    const BOB: Address = Address::new([0xB2; 20]);
    const ADMIN: Address = Address::new([0xAD; 20]);
    const REVENUE: Address = Address::new([0xEE; 20]);

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn setup() -> (
        Arc<InMemoryRegistry>,
        PostService<InMemoryRegistry>,
        DomainName,
    ) {
        let registry = Arc::new(InMemoryRegistry::new());
        let service = PostService::new(
            registry.clone(),
            PostServiceConfig {
                admin: ADMIN,
                revenue_account: REVENUE,
                ..PostServiceConfig::default()
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
    async fn test_pin_is_exclusive_per_owner_and_namespace() {
        let (_, service, domain) = setup();
        service
            .add_posts(ALICE, &domain, urls(&["u0", "u1"]), "blog", U256::zero())
            .await
            .unwrap();

        service.pin_post(ALICE, &domain, "blog", 0).await.unwrap();
        assert_eq!(service.pinned_post(&domain, ALICE, "blog").await, Some(0));

        // slot taken; id 0 is a valid pin target even though it is the
        // zeroth id
        assert_eq!(
            service.pin_post(ALICE, &domain, "blog", 1).await.unwrap_err(),
            PostError::AlreadyPinned
        );

        // swap via unpin + pin
        service.unpin_post(ALICE, &domain, "blog").await.unwrap();
        service.pin_post(ALICE, &domain, "blog", 1).await.unwrap();
        assert_eq!(service.pinned_post(&domain, ALICE, "blog").await, Some(1));
    }

    #[tokio::test]
    async fn test_namespaces_pin_independently() {
        let (_, service, domain) = setup();
        service
            .add_posts(ALICE, &domain, urls(&["a0"]), "blog", U256::zero())
            .await
            .unwrap();
        service
            .add_posts(ALICE, &domain, urls(&["b0"]), "shop", U256::zero())
            .await
            .unwrap();

        service.pin_post(ALICE, &domain, "blog", 0).await.unwrap();
        service.pin_post(ALICE, &domain, "shop", 1).await.unwrap();

        assert_eq!(service.pinned_post(&domain, ALICE, "blog").await, Some(0));
        assert_eq!(service.pinned_post(&domain, ALICE, "shop").await, Some(1));

        // pinning across namespaces is rejected
        service.unpin_post(ALICE, &domain, "blog").await.unwrap();
        assert_eq!(
            service.pin_post(ALICE, &domain, "blog", 1).await.unwrap_err(),
            PostError::NamespaceMismatch {
                slot: "blog".to_string(),
                post: "shop".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_pin_requires_post_ownership() {
        let (registry, service, domain) = setup();
        service
            .add_posts(ALICE, &domain, urls(&["u0"]), "", U256::zero())
            .await
            .unwrap();

        // the domain gate comes first for outsiders
        assert_eq!(
            service.pin_post(BOB, &domain, "", 0).await.unwrap_err(),
            PostError::NotDomainOwner
        );
        // out-of-range target
        assert_eq!(
            service.pin_post(ALICE, &domain, "", 9).await.unwrap_err(),
            PostError::InvalidId { id: 9 }
        );

        // holding the domain is not enough: the post still belongs to alice
        registry.transfer(&domain, BOB);
        assert_eq!(
            service.pin_post(BOB, &domain, "", 0).await.unwrap_err(),
            PostError::InvalidOwner { id: 0 }
        );
    }

    #[tokio::test]
    async fn test_deleted_pin_goes_stale_without_cleanup() {
        let (_, service, domain) = setup();
        service
            .add_posts(ALICE, &domain, urls(&["u0", "u1"]), "", U256::zero())
            .await
            .unwrap();
        service.pin_post(ALICE, &domain, "", 0).await.unwrap();

        service.delete_posts(ALICE, &domain, &[0]).await.unwrap();

        // the stale slot resolves to nothing and unpin treats it as empty
        assert_eq!(service.pinned_post(&domain, ALICE, "").await, None);
        assert_eq!(
            service.unpin_post(ALICE, &domain, "").await.unwrap_err(),
            PostError::NothingPinned
        );

        // the freed slot accepts a fresh pin
        service.pin_post(ALICE, &domain, "", 1).await.unwrap();
        assert_eq!(service.pinned_post(&domain, ALICE, "").await, Some(1));
    }

    #[tokio::test]
    async fn test_transferred_pin_goes_stale_for_old_owner() {
        let (registry, service, domain) = setup();
        service
            .add_posts(ALICE, &domain, urls(&["u0"]), "", U256::zero())
            .await
            .unwrap();
        service.pin_post(ALICE, &domain, "", 0).await.unwrap();

        // full domain sale: posts move, then the registry entry moves
        service
            .transfer_post_ownership(ALICE, &domain, BOB, true, "")
            .await
            .unwrap();
        registry.transfer(&domain, BOB);

        // alice's slot no longer resolves; bob has no pin until he sets one
        assert_eq!(service.pinned_post(&domain, ALICE, "").await, None);
        assert_eq!(service.pinned_post(&domain, BOB, "").await, None);

        service.pin_post(BOB, &domain, "", 0).await.unwrap();
        assert_eq!(service.pinned_post(&domain, BOB, "").await, Some(0));
    }
}
