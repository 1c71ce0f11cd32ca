//! A client followed from creation to freezing, observed through the registry
//! and through the query gateway.

use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::events::ClientEvent;
use ibc_core_client::types::Height;
use ibc_query::core::client::types::{QueryClientStateResponse, QueryVerifiedRootResponse};
use ibc_query::error::{CLIENT_CODESPACE, CODE_ROOT_NOT_FOUND};
use ibc_query::gateway::{CLIENT_STATE_PATH, VERIFIED_ROOT_PATH};
use ibc_testkit::fixtures::core::client::height;
use ibc_testkit::fixtures::query::query_json;
use ibc_testkit::utils::dummy_root;
use serde_json::json;
use subtle_encoding::{Encoding, Hex};
use test_log::test;
use tests_integration::Scenario;

const CLIENT_ID: &str = "07-tendermint-0";

fn verified_root_via_gateway(scenario: &Scenario, h: u64) -> QueryVerifiedRootResponse {
    let value = query_json(
        &scenario.gateway(),
        &scenario.store,
        VERIFIED_ROOT_PATH,
        json!({ "client_id": CLIENT_ID, "height": h }),
    )
    .expect("root is verified");
    serde_json::from_value(value).expect("verified root response")
}

#[test]
fn tendermint_client_lifecycle() {
    let mut scenario = Scenario::default();
    assert_eq!(scenario.client.client_id.as_str(), CLIENT_ID);
    let r1 = dummy_root("R1");
    let r2 = dummy_root("R2");

    // create at 100 with R1
    scenario.create(100, "R1").expect("client created");
    let root = scenario
        .registry
        .verified_root(&scenario.store, &scenario.client.client_id, height(100))
        .expect("verified at creation");
    assert_eq!(root.root(), &r1);

    // update to 150 with R2
    scenario.update(150, "R2").expect("client updated");
    assert_eq!(verified_root_via_gateway(&scenario, 100).root.root(), &r1);
    assert_eq!(verified_root_via_gateway(&scenario, 150).root.root(), &r2);
    assert_eq!(
        scenario
            .registry
            .client_state(&scenario.store, &scenario.client.client_id)
            .expect("client exists")
            .latest_height,
        height(150)
    );

    // nothing was ever verified at 120
    let err = scenario
        .registry
        .verified_root(&scenario.store, &scenario.client.client_id, height(120))
        .expect_err("never verified");
    assert!(matches!(err, ClientError::RootNotFound { height: h, .. } if h == height(120)));

    let err_response = query_json(
        &scenario.gateway(),
        &scenario.store,
        VERIFIED_ROOT_PATH,
        json!({ "client_id": CLIENT_ID, "height": 120 }),
    )
    .expect_err("never verified");
    assert_eq!(err_response.codespace, CLIENT_CODESPACE);
    assert_eq!(err_response.code, CODE_ROOT_NOT_FOUND);

    // freeze at 150, then updates are refused
    scenario.freeze(150).expect("client frozen");
    let err = scenario.update(200, "R3").expect_err("client is frozen");
    assert!(matches!(
        err,
        ClientError::ClientFrozen { frozen_height, .. } if frozen_height == height(150)
    ));

    let value = query_json(
        &scenario.gateway(),
        &scenario.store,
        CLIENT_STATE_PATH,
        json!({ "client_id": CLIENT_ID }),
    )
    .expect("client exists");
    assert_eq!(value["client_state"]["frozen_height"], json!(150));
    assert_eq!(value["client_state"]["latest_height"], json!(150));
    let response: QueryClientStateResponse =
        serde_json::from_value(value).expect("client state response");
    assert_eq!(response.client_state.frozen_height, Some(height(150)));

    // roots recorded before the freeze stay readable
    assert_eq!(verified_root_via_gateway(&scenario, 150).root.root(), &r2);

    let kinds: Vec<String> = scenario
        .host
        .client_events()
        .iter()
        .map(|event| event.event_type().to_string())
        .collect();
    assert_eq!(
        kinds,
        vec!["create_client", "update_client", "client_misbehaviour"]
    );
    assert!(matches!(
        scenario.host.client_events().last(),
        Some(ClientEvent::ClientMisbehaviour(e)) if *e.frozen_height() == Height::new(150).expect("non-zero")
    ));
}

#[test]
fn verified_root_json_carries_upper_case_hex() {
    let mut scenario = Scenario::default();
    scenario.create(100, "R1").expect("client created");

    let value = query_json(
        &scenario.gateway(),
        &scenario.store,
        VERIFIED_ROOT_PATH,
        json!({ "client_id": CLIENT_ID, "height": 100 }),
    )
    .expect("root is verified");

    let expected_hex = Hex::upper_case()
        .encode_to_string(dummy_root("R1").as_bytes())
        .expect("hex encodes");
    assert_eq!(value["root"]["root"], json!(expected_hex));
    assert_eq!(value["root"]["height"], json!(100));
}
