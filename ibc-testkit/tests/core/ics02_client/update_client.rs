use ibc_core_client::handler::update_client::{self, UpdateAction};
use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::events::{ClientEvent, UpdateClient};
use ibc_core_client::types::msgs::MsgUpdateClient;
use ibc_core_client::types::Height;
use ibc_testkit::fixtures::core::client::{height, ClientFixture};
use ibc_testkit::fixtures::{Expect, Fixture};
use rstest::*;

struct UpdateFixture {
    client: ClientFixture,
    fxt: Fixture<MsgUpdateClient>,
}

/// A client created at height 100 and an update to height 150.
#[fixture]
fn fixture() -> UpdateFixture {
    let client = ClientFixture::default();
    let mut fxt = Fixture::new(client.msg_update_client(150, "R2"));

    fxt.registry
        .create_client(
            &mut fxt.store,
            &mut fxt.host,
            client.msg_create_client(100, "R1"),
        )
        .expect("client created");
    fxt.host.clear();

    UpdateFixture { client, fxt }
}

fn update_client_execute(fxt: &mut Fixture<MsgUpdateClient>, expect: Expect) {
    let res = fxt
        .registry
        .update_client(&mut fxt.store, &mut fxt.host, fxt.msg.clone());
    assert!(
        expect.matches(&res),
        "{}",
        fxt.generate_error_msg(&expect, "execution", &res)
    );
}

fn latest_height(fxt: &Fixture<MsgUpdateClient>) -> Height {
    fxt.registry
        .client_state(&fxt.store, &fxt.msg.client_id)
        .expect("client exists")
        .latest_height
}

#[rstest]
fn test_update_client_ok(fixture: UpdateFixture) {
    let UpdateFixture { mut fxt, .. } = fixture;

    let action = update_client::validate(&fxt.registry, &fxt.store, &fxt.host, &fxt.msg)
        .expect("valid update");
    assert!(matches!(action, UpdateAction::Advance(_)));

    update_client_execute(&mut fxt, Expect::Success);

    assert_eq!(latest_height(&fxt), height(150));
    assert_eq!(
        fxt.registry
            .consensus_state(&fxt.store, &fxt.msg.client_id, height(150))
            .expect("stored"),
        fxt.msg.consensus_state
    );
    assert_eq!(
        fxt.registry
            .consensus_state_heights(&fxt.store, &fxt.msg.client_id)
            .expect("stored"),
        vec![height(100), height(150)]
    );
    assert_eq!(
        fxt.host.client_events(),
        vec![ClientEvent::UpdateClient(UpdateClient::new(
            fxt.msg.client_id.clone(),
            height(150)
        ))]
    );
}

#[rstest]
fn test_identical_update_is_idempotent(fixture: UpdateFixture) {
    let UpdateFixture { mut fxt, .. } = fixture;

    update_client_execute(&mut fxt, Expect::Success);
    let store_after_first = fxt.store.clone();

    let action = update_client::validate(&fxt.registry, &fxt.store, &fxt.host, &fxt.msg)
        .expect("valid update");
    assert_eq!(action, UpdateAction::AlreadyRecorded);

    update_client_execute(&mut fxt, Expect::Success);

    assert_eq!(fxt.store, store_after_first);
    assert_eq!(fxt.host.events.len(), 1);
}

#[rstest]
fn test_resubmitting_initial_records_is_a_no_op(fixture: UpdateFixture) {
    let UpdateFixture { client, mut fxt } = fixture;
    fxt.msg = client.msg_update_client(100, "R1");

    update_client_execute(&mut fxt, Expect::Success);

    assert_eq!(latest_height(&fxt), height(100));
    assert!(fxt.host.events.is_empty());
}

#[rstest]
fn test_conflicting_update_fails(fixture: UpdateFixture) {
    let UpdateFixture { client, mut fxt } = fixture;

    update_client_execute(&mut fxt, Expect::Success);
    let store_before = fxt.store.clone();

    fxt.msg = client.msg_update_client(150, "R2-forged");
    let err = fxt
        .registry
        .update_client(&mut fxt.store, &mut fxt.host, fxt.msg.clone())
        .expect_err("conflicting update");

    assert!(matches!(
        err,
        ClientError::ConflictingUpdate { ref client_id, height: h }
            if *client_id == client.client_id && h == height(150)
    ));
    assert!(err.is_misbehaviour());
    assert_eq!(fxt.store, store_before);
    // the conflict alone does not freeze the client
    assert!(!fxt
        .registry
        .client_state(&fxt.store, &client.client_id)
        .expect("exists")
        .is_frozen());
}

#[rstest]
fn test_update_below_latest_at_unrecorded_height_fails(fixture: UpdateFixture) {
    let UpdateFixture { client, mut fxt } = fixture;

    update_client_execute(&mut fxt, Expect::Success);

    fxt.msg = client.msg_update_client(120, "R3");
    update_client_execute(
        &mut fxt,
        Expect::Failure(Some(ClientError::InvalidHeight {
            client_id: client.client_id.clone(),
            height: height(120),
            latest_height: height(150),
        })),
    );
}

#[rstest]
fn test_differing_update_below_latest_fails(fixture: UpdateFixture) {
    let UpdateFixture { client, mut fxt } = fixture;

    update_client_execute(&mut fxt, Expect::Success);
    let store_before = fxt.store.clone();

    fxt.msg = client.msg_update_client(100, "R1-forged");
    update_client_execute(
        &mut fxt,
        Expect::Failure(Some(ClientError::InvalidHeight {
            client_id: client.client_id.clone(),
            height: height(100),
            latest_height: height(150),
        })),
    );
    assert_eq!(fxt.store, store_before);
}

#[rstest]
fn test_update_unknown_client_fails(fixture: UpdateFixture) {
    let UpdateFixture { mut fxt, .. } = fixture;
    let unknown = ClientFixture::builder()
        .client_id("07-tendermint-9".parse().expect("valid client id"))
        .build();
    fxt.msg = unknown.msg_update_client(150, "R2");

    update_client_execute(
        &mut fxt,
        Expect::Failure(Some(ClientError::ClientNotFound {
            client_id: unknown.client_id,
        })),
    );
}

#[rstest]
fn test_update_frozen_client_fails(fixture: UpdateFixture) {
    let UpdateFixture { client, mut fxt } = fixture;

    fxt.registry
        .freeze_client(&mut fxt.store, &mut fxt.host, client.msg_freeze_client(100))
        .expect("frozen");

    update_client_execute(
        &mut fxt,
        Expect::Failure(Some(ClientError::ClientFrozen {
            client_id: client.client_id.clone(),
            frozen_height: height(100),
        })),
    );
    assert_eq!(latest_height(&fxt), height(100));
}

#[rstest]
fn test_update_with_mismatched_consensus_height_fails(fixture: UpdateFixture) {
    let UpdateFixture { client, mut fxt } = fixture;
    fxt.msg.consensus_state = client.consensus_state(151, "R2");

    update_client_execute(
        &mut fxt,
        Expect::Failure(Some(ClientError::MismatchedHeight {
            expected: height(150),
            actual: height(151),
        })),
    );
}
