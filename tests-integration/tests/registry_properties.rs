//! Behavioural properties of the registry over a range of heights.

use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::ClientState;
use ibc_testkit::fixtures::core::client::height;
use rstest::rstest;
use tests_integration::Scenario;

#[rstest]
fn unknown_client_is_not_found() {
    let scenario = Scenario::default();

    let err = scenario
        .registry
        .client_state(&scenario.store, &scenario.client.client_id)
        .expect_err("never created");

    assert!(matches!(err, ClientError::ClientNotFound { .. }));
}

#[rstest]
fn created_client_reads_back_exactly(#[values(1, 100, 1_000_000)] initial: u64) {
    let mut scenario = Scenario::default();
    scenario.create(initial, "R1").expect("client created");

    let expected = ClientState::new(
        scenario.client.client_id.clone(),
        scenario.client.chain_id.clone(),
        height(initial),
        scenario.client.trusting_period,
    )
    .expect("valid client state");
    assert_eq!(
        scenario
            .registry
            .client_state(&scenario.store, &scenario.client.client_id)
            .expect("stored"),
        expected
    );
}

#[rstest]
fn identical_updates_succeed_repeatedly(#[values(101, 150, 10_000)] target: u64) {
    let mut scenario = Scenario::default();
    scenario.create(100, "R1").expect("client created");

    scenario.update(target, "R2").expect("first update");
    let snapshot = scenario.store.clone();
    scenario.update(target, "R2").expect("repeated update");

    assert_eq!(scenario.store, snapshot);
}

#[rstest]
fn differing_update_at_latest_height_conflicts(#[values(100, 150)] latest: u64) {
    let mut scenario = Scenario::default();
    scenario.create(100, "R1").expect("client created");
    if latest > 100 {
        scenario.update(latest, "R2").expect("client updated");
    }
    let snapshot = scenario.store.clone();

    let err = scenario
        .update(latest, "forged")
        .expect_err("records differ");

    assert!(matches!(err, ClientError::ConflictingUpdate { height: h, .. } if h == height(latest)));
    assert_eq!(scenario.store, snapshot);
}

#[rstest]
fn differing_update_below_latest_is_invalid(#[values(1, 100, 120, 149)] target: u64) {
    let mut scenario = Scenario::default();
    scenario.create(100, "R1").expect("client created");
    scenario.update(150, "R2").expect("client updated");
    let snapshot = scenario.store.clone();

    let err = scenario
        .update(target, "forged")
        .expect_err("below latest");

    assert!(matches!(
        err,
        ClientError::InvalidHeight { height: h, latest_height, .. }
            if h == height(target) && latest_height == height(150)
    ));
    assert_eq!(scenario.store, snapshot);
}

#[rstest]
fn update_below_latest_at_unrecorded_height_is_invalid(#[values(1, 99, 120, 149)] target: u64) {
    let mut scenario = Scenario::default();
    scenario.create(100, "R1").expect("client created");
    scenario.update(150, "R2").expect("client updated");

    let err = scenario.update(target, "R3").expect_err("below latest");

    assert!(matches!(
        err,
        ClientError::InvalidHeight { height: h, latest_height, .. }
            if h == height(target) && latest_height == height(150)
    ));
}

#[rstest]
fn frozen_client_rejects_updates_but_stays_readable(#[values(100, 150, 300)] frozen_at: u64) {
    let mut scenario = Scenario::default();
    scenario.create(100, "R1").expect("client created");
    scenario.update(150, "R2").expect("client updated");
    scenario.freeze(frozen_at).expect("client frozen");

    for target in [150, 151, 200] {
        assert!(matches!(
            scenario.update(target, "R2"),
            Err(ClientError::ClientFrozen { frozen_height, .. }) if frozen_height == height(frozen_at)
        ));
    }

    for (h, seed) in [(100, "R1"), (150, "R2")] {
        assert_eq!(
            scenario
                .registry
                .consensus_state(&scenario.store, &scenario.client.client_id, height(h))
                .expect("still readable"),
            scenario.client.consensus_state(h, seed)
        );
    }
}
