use ibc_core_client::types::error::ClientError;
use ibc_core_client::ClientRegistry;
use ibc_core_host::store::Store;
use ibc_core_host::types::identifiers::ClientId;
use ibc_testkit::fixtures::core::client::{height, ClientFixture};
use ibc_testkit::hosts::MockHost;
use ibc_testkit::stores::InMemoryStore;
use rstest::*;

fn client_id(counter: u64) -> ClientId {
    ClientId::new("07-tendermint", counter).expect("valid client id")
}

fn registry_with_client(client: &ClientFixture) -> (ClientRegistry, InMemoryStore) {
    let registry = ClientRegistry::default();
    let mut store = InMemoryStore::default();
    let mut host = MockHost::default();

    registry
        .create_client(&mut store, &mut host, client.msg_create_client(100, "R1"))
        .expect("client created");
    registry
        .update_client(&mut store, &mut host, client.msg_update_client(150, "R2"))
        .expect("client updated");

    (registry, store)
}

#[test_log::test]
fn unknown_client_is_reported_by_every_read() {
    let registry = ClientRegistry::default();
    let store = InMemoryStore::default();
    let id = client_id(0);
    let h = height(1);

    let results = [
        registry.client_state(&store, &id).map(drop),
        registry.client_status(&store, &id).map(drop),
        registry.consensus_state(&store, &id, h).map(drop),
        registry.latest_consensus_state(&store, &id).map(drop),
        registry.consensus_state_heights(&store, &id).map(drop),
        registry.verified_root(&store, &id, h).map(drop),
        registry.committer(&store, &id, h).map(drop),
    ];

    for result in results {
        assert!(matches!(result, Err(ClientError::ClientNotFound { .. })));
    }
}

#[rstest]
#[case::consensus_state(|r: &ClientRegistry, s: &InMemoryStore, id: &ClientId| r.consensus_state(s, id, height(120)).map(drop))]
#[case::verified_root(|r: &ClientRegistry, s: &InMemoryStore, id: &ClientId| r.verified_root(s, id, height(120)).map(drop))]
#[case::committer(|r: &ClientRegistry, s: &InMemoryStore, id: &ClientId| r.committer(s, id, height(120)).map(drop))]
fn missing_height_is_distinct_from_missing_client(
    #[case] read: fn(&ClientRegistry, &InMemoryStore, &ClientId) -> Result<(), ClientError>,
) {
    let client = ClientFixture::default();
    let (registry, store) = registry_with_client(&client);

    let err = read(&registry, &store, &client.client_id).expect_err("nothing at 120");

    assert!(err.is_not_found());
    assert!(!matches!(err, ClientError::ClientNotFound { .. }));
}

#[test_log::test]
fn verified_root_reads_through_to_consensus_state() {
    let client = ClientFixture::default();
    let (registry, store) = registry_with_client(&client);

    let root = registry
        .verified_root(&store, &client.client_id, height(150))
        .expect("verified");

    assert_eq!(root.height(), height(150));
    assert_eq!(root.root(), client.consensus_state(150, "R2").root());
}

#[test_log::test]
fn latest_consensus_state_follows_updates() {
    let client = ClientFixture::default();
    let (registry, store) = registry_with_client(&client);

    assert_eq!(
        registry
            .latest_consensus_state(&store, &client.client_id)
            .expect("stored"),
        client.consensus_state(150, "R2")
    );
}

#[test_log::test]
fn client_states_are_listed_in_identifier_order() {
    let registry = ClientRegistry::default();
    let mut store = InMemoryStore::default();
    let mut host = MockHost::default();

    for counter in [2, 0, 1] {
        let client = ClientFixture::builder().client_id(client_id(counter)).build();
        registry
            .create_client(&mut store, &mut host, client.msg_create_client(10, "R"))
            .expect("client created");
    }

    let ids: Vec<ClientId> = registry
        .client_states(&store)
        .expect("readable")
        .into_iter()
        .map(|cs| cs.client_id)
        .collect();

    assert_eq!(ids, vec![client_id(0), client_id(1), client_id(2)]);
}

#[test_log::test]
fn client_states_skip_other_keys_below_clients() {
    let client = ClientFixture::default();
    let (registry, mut store) = registry_with_client(&client);

    for key in [
        "clients/07-tendermint-0/processedTime/100",
        "clients/x/metadata",
        "clients/",
    ] {
        store
            .set(key.as_bytes().to_vec(), b"opaque".to_vec())
            .expect("infallible");
    }

    let client_states = registry.client_states(&store).expect("readable");

    assert_eq!(client_states.len(), 1);
    assert_eq!(client_states[0].client_id, client.client_id);
}
