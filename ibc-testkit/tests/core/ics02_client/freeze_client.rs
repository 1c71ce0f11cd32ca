use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::events::{ClientEvent, ClientMisbehaviour};
use ibc_core_client::types::Status;
use ibc_core_client::ClientRegistry;
use ibc_testkit::fixtures::core::client::{height, ClientFixture};
use ibc_testkit::hosts::MockHost;
use ibc_testkit::stores::InMemoryStore;
use test_log::test;

fn setup() -> (ClientFixture, ClientRegistry, InMemoryStore, MockHost) {
    let client = ClientFixture::default();
    let registry = ClientRegistry::default();
    let mut store = InMemoryStore::default();
    let mut host = MockHost::default();

    registry
        .create_client(&mut store, &mut host, client.msg_create_client(100, "R1"))
        .expect("client created");
    registry
        .update_client(&mut store, &mut host, client.msg_update_client(150, "R2"))
        .expect("client updated");
    host.clear();

    (client, registry, store, host)
}

#[test]
fn test_freeze_client_ok() {
    let (client, registry, mut store, mut host) = setup();

    registry
        .freeze_client(&mut store, &mut host, client.msg_freeze_client(150))
        .expect("frozen");

    let client_state = registry
        .client_state(&store, &client.client_id)
        .expect("exists");
    assert_eq!(client_state.frozen_height, Some(height(150)));
    assert_eq!(client_state.latest_height, height(150));
    assert_eq!(
        registry.client_status(&store, &client.client_id).expect("exists"),
        Status::Frozen
    );
    assert_eq!(
        host.client_events(),
        vec![ClientEvent::ClientMisbehaviour(ClientMisbehaviour::new(
            client.client_id.clone(),
            height(150)
        ))]
    );
}

#[test]
fn test_freeze_keeps_recorded_states_readable() {
    let (client, registry, mut store, mut host) = setup();

    registry
        .freeze_client(&mut store, &mut host, client.msg_freeze_client(150))
        .expect("frozen");

    for (h, seed) in [(100, "R1"), (150, "R2")] {
        assert_eq!(
            registry
                .consensus_state(&store, &client.client_id, height(h))
                .expect("readable"),
            client.consensus_state(h, seed)
        );
        assert_eq!(
            registry
                .verified_root(&store, &client.client_id, height(h))
                .expect("readable")
                .root(),
            client.consensus_state(h, seed).root()
        );
    }
}

#[test]
fn test_freeze_twice_keeps_original_height() {
    let (client, registry, mut store, mut host) = setup();

    registry
        .freeze_client(&mut store, &mut host, client.msg_freeze_client(150))
        .expect("frozen");
    let store_after_first = store.clone();

    registry
        .freeze_client(&mut store, &mut host, client.msg_freeze_client(120))
        .expect("freezing a frozen client is a no-op");

    assert_eq!(store, store_after_first);
    assert_eq!(host.events.len(), 1);
    assert_eq!(
        registry
            .client_state(&store, &client.client_id)
            .expect("exists")
            .frozen_height,
        Some(height(150))
    );
}

#[test]
fn test_freeze_unknown_client_fails() {
    let (_, registry, mut store, mut host) = setup();
    let unknown = ClientFixture::builder()
        .client_id("07-tendermint-7".parse().expect("valid client id"))
        .build();

    let err = registry
        .freeze_client(&mut store, &mut host, unknown.msg_freeze_client(10))
        .expect_err("unknown client");

    assert!(matches!(err, ClientError::ClientNotFound { client_id } if client_id == unknown.client_id));
    assert!(host.events.is_empty());
}
