use std::time::Duration;

use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::events::{ClientEvent, PruneConsensusStates};
use ibc_core_client::types::Height;
use ibc_core_client::{ClientRegistry, RegistryConfig};
use ibc_testkit::fixtures::core::client::{height, ClientFixture};
use ibc_testkit::hosts::MockHost;
use ibc_testkit::stores::InMemoryStore;
use rstest::*;

const MINUTE: u64 = 60;

struct PruneFixture {
    client: ClientFixture,
    registry: ClientRegistry,
    store: InMemoryStore,
    host: MockHost,
}

impl PruneFixture {
    fn prune(&mut self) -> Result<Vec<Height>, ClientError> {
        self.registry.prune_expired_consensus_states(
            &mut self.store,
            &mut self.host,
            &self.client.client_id,
        )
    }

    fn heights(&self) -> Vec<Height> {
        self.registry
            .consensus_state_heights(&self.store, &self.client.client_id)
            .expect("client exists")
    }
}

fn heights(hs: &[u64]) -> Vec<Height> {
    hs.iter().copied().map(height).collect()
}

/// A client with a one hour trusting period and consensus states at heights
/// 1 to 4, taken ten minutes apart starting when the host starts.
fn prune_fixture(config: RegistryConfig) -> PruneFixture {
    let client = ClientFixture::builder()
        .trusting_period(Duration::from_secs(60 * MINUTE))
        .block_time(Duration::from_secs(10 * MINUTE))
        .build();
    let registry = ClientRegistry::new(config);
    let mut store = InMemoryStore::default();
    let mut host = MockHost::default();

    registry
        .create_client(&mut store, &mut host, client.msg_create_client(1, "s1"))
        .expect("client created");
    for h in 2..=4 {
        registry
            .update_client(
                &mut store,
                &mut host,
                client.msg_update_client(h, &format!("s{h}")),
            )
            .expect("client updated");
    }
    host.clear();

    PruneFixture {
        client,
        registry,
        store,
        host,
    }
}

#[fixture]
fn fixture() -> PruneFixture {
    prune_fixture(RegistryConfig::default())
}

#[rstest]
fn test_prune_removes_expired_states_oldest_first(mut fixture: PruneFixture) {
    // heights 1 and 2 expire at +60m and +70m, height 3 only at +80m
    fixture.host.advance_time(Duration::from_secs(75 * MINUTE));

    let pruned = fixture.prune().expect("pruned");

    assert_eq!(pruned, heights(&[1, 2]));
    assert_eq!(fixture.heights(), heights(&[3, 4]));
    assert!(matches!(
        fixture
            .registry
            .committer(&fixture.store, &fixture.client.client_id, height(1)),
        Err(ClientError::CommitterNotFound { .. })
    ));
    assert!(fixture
        .registry
        .committer(&fixture.store, &fixture.client.client_id, height(3))
        .is_ok());
    assert_eq!(
        fixture.host.client_events(),
        vec![ClientEvent::PruneConsensusStates(PruneConsensusStates::new(
            fixture.client.client_id.clone(),
            heights(&[1, 2])
        ))]
    );
}

#[rstest]
fn test_prune_never_removes_latest_height(mut fixture: PruneFixture) {
    fixture.host.advance_time(Duration::from_secs(10 * 60 * MINUTE));

    let pruned = fixture.prune().expect("pruned");

    assert_eq!(pruned, heights(&[1, 2, 3]));
    assert_eq!(fixture.heights(), heights(&[4]));
    assert!(fixture
        .registry
        .latest_consensus_state(&fixture.store, &fixture.client.client_id)
        .is_ok());
}

#[rstest]
fn test_prune_is_bounded_by_limit() {
    let mut fixture = prune_fixture(RegistryConfig::builder().prune_limit(2).build());
    fixture.host.advance_time(Duration::from_secs(10 * 60 * MINUTE));

    assert_eq!(fixture.prune().expect("pruned"), heights(&[1, 2]));
    assert_eq!(fixture.prune().expect("pruned"), heights(&[3]));
    assert_eq!(fixture.prune().expect("pruned"), vec![]);
}

#[rstest]
fn test_prune_without_expired_states_is_a_no_op(mut fixture: PruneFixture) {
    let store_before = fixture.store.clone();

    assert_eq!(fixture.prune().expect("nothing to prune"), vec![]);

    assert_eq!(fixture.store, store_before);
    assert!(fixture.host.events.is_empty());
}

#[rstest]
fn test_prune_frozen_client_fails(mut fixture: PruneFixture) {
    let msg = fixture.client.msg_freeze_client(4);
    fixture
        .registry
        .freeze_client(&mut fixture.store, &mut fixture.host, msg)
        .expect("frozen");
    fixture.host.advance_time(Duration::from_secs(10 * 60 * MINUTE));

    assert!(matches!(
        fixture.prune(),
        Err(ClientError::ClientFrozen { .. })
    ));
    assert_eq!(fixture.heights(), heights(&[1, 2, 3, 4]));
}
