use std::time::Duration;

use ibc_core_client::handler::create_client;
use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::events::{ClientEvent, CreateClient};
use ibc_core_client::types::msgs::{ClientMsg, MsgCreateClient};
use ibc_core_client::types::{ClientState, Status};
use ibc_core_client::{ClientRegistry, RegistryConfig};
use ibc_testkit::fixtures::core::client::{height, ClientFixture};
use ibc_testkit::fixtures::{Expect, Fixture};
use rstest::*;

#[fixture]
fn fixture() -> Fixture<MsgCreateClient> {
    Fixture::new(ClientFixture::default().msg_create_client(100, "R1"))
}

fn create_client_validate(fxt: &Fixture<MsgCreateClient>, expect: Expect) {
    let res = create_client::validate(&fxt.registry, &fxt.store, &fxt.host, &fxt.msg);
    assert!(
        expect.matches(&res),
        "{}",
        fxt.generate_error_msg(&expect, "validation", &res)
    );
}

fn create_client_execute(fxt: &mut Fixture<MsgCreateClient>, expect: Expect) {
    let res = fxt
        .registry
        .create_client(&mut fxt.store, &mut fxt.host, fxt.msg.clone());
    assert!(
        expect.matches(&res),
        "{}",
        fxt.generate_error_msg(&expect, "execution", &res)
    );
}

#[rstest]
fn test_create_client_ok(mut fixture: Fixture<MsgCreateClient>) {
    create_client_validate(&fixture, Expect::Success);
    create_client_execute(&mut fixture, Expect::Success);

    let msg = fixture.msg.clone();
    let expected = ClientState::new(
        msg.client_id.clone(),
        msg.chain_id.clone(),
        height(100),
        msg.trusting_period,
    )
    .expect("valid client state");

    let registry = &fixture.registry;
    let store = &fixture.store;
    assert_eq!(
        registry.client_state(store, &msg.client_id).expect("stored"),
        expected
    );
    assert_eq!(
        registry.client_status(store, &msg.client_id).expect("stored"),
        Status::Active
    );
    assert_eq!(
        registry
            .consensus_state(store, &msg.client_id, height(100))
            .expect("stored"),
        msg.consensus_state
    );
    assert_eq!(
        registry
            .committer(store, &msg.client_id, height(100))
            .expect("stored"),
        msg.committer
    );

    assert_eq!(
        fixture.host.client_events(),
        vec![ClientEvent::CreateClient(CreateClient::new(
            msg.client_id,
            msg.chain_id,
            height(100)
        ))]
    );
    assert_eq!(fixture.host.logs.len(), 1);
}

#[rstest]
fn test_create_client_through_dispatch(mut fixture: Fixture<MsgCreateClient>) {
    let msg = ClientMsg::from(fixture.msg.clone());

    fixture
        .registry
        .dispatch(&mut fixture.store, &mut fixture.host, msg)
        .expect("created");

    assert!(fixture
        .registry
        .client_state(&fixture.store, &fixture.msg.client_id)
        .is_ok());
}

#[rstest]
fn test_create_client_twice_fails(mut fixture: Fixture<MsgCreateClient>) {
    create_client_execute(&mut fixture, Expect::Success);

    let store_before = fixture.store.clone();
    let client_id = fixture.msg.client_id.clone();

    create_client_validate(
        &fixture,
        Expect::Failure(Some(ClientError::AlreadyExists {
            client_id: client_id.clone(),
        })),
    );
    create_client_execute(
        &mut fixture,
        Expect::Failure(Some(ClientError::AlreadyExists { client_id })),
    );

    assert_eq!(fixture.store, store_before);
    assert_eq!(fixture.host.events.len(), 1);
}

#[rstest]
#[case::zero(Duration::ZERO)]
#[case::above_default_max(Duration::from_secs(15 * 24 * 60 * 60))]
fn test_create_client_rejects_trusting_period(#[case] trusting_period: Duration) {
    let client = ClientFixture::builder()
        .trusting_period(trusting_period)
        .build();
    let fixture = Fixture::new(client.msg_create_client(100, "R1"));

    create_client_validate(
        &fixture,
        Expect::Failure(Some(ClientError::InvalidTrustingPeriod {
            description: String::new(),
        })),
    );
}

#[rstest]
fn test_create_client_honours_configured_max(mut fixture: Fixture<MsgCreateClient>) {
    fixture.registry = ClientRegistry::new(
        RegistryConfig::builder()
            .max_trusting_period(Duration::from_secs(24 * 60 * 60))
            .build(),
    );

    create_client_execute(
        &mut fixture,
        Expect::Failure(Some(ClientError::InvalidTrustingPeriod {
            description: String::new(),
        })),
    );
    assert!(fixture.store.is_empty());
}

#[rstest]
fn test_create_client_with_mismatched_committer(mut fixture: Fixture<MsgCreateClient>) {
    fixture.msg.committer = ClientFixture::default().committer(99, "R1");

    create_client_validate(
        &fixture,
        Expect::Failure(Some(ClientError::MismatchedHeight {
            expected: height(100),
            actual: height(99),
        })),
    );
}
