use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use mintgate::server::controller::rc001::{
    get_collection, get_inscriptions, list_collections, validate,
};
use mintgate_test_utils::prelude::*;

use crate::util::test_utils::{body_json, respond, TestContextExt};

/// Expect collections newest first with supply statistics
#[tokio::test]
async fn lists_collections_with_stats() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_collection("Old Cats", &["1-4"])
        .with_collection("New Dogs", &["1-9", "1-9"])
        .build()
        .await?;
    let cats = test
        .ledger()
        .insert_mock_collection_at("Cats", &["1-10"], 50)
        .await?;
    test.ledger()
        .insert_inscribed_item(cats.id, "000001", "insc1i0", "addr1", 7)
        .await?;

    let response = respond(list_collections(State(test.app_state())).await);

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let collections = body.as_array().cloned().unwrap_or_default();
    assert_eq!(collections.len(), 3);
    assert_eq!(collections[0]["name"], "New Dogs");
    assert_eq!(collections[0]["max_supply"], 81);
    assert_eq!(collections[1]["name"], "Old Cats");
    assert_eq!(collections[2]["name"], "Cats");
    assert_eq!(collections[2]["minted"], 1);
    assert_eq!(collections[2]["left_to_mint"], 9);
    assert_eq!(collections[2]["percent_minted"], 10.0);
    assert_eq!(collections[2]["items"][0]["inscription_id"], "insc1i0");

    Ok(())
}

/// Expect 404 for a collection that was never deployed
#[tokio::test]
async fn unknown_collection_is_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let response = respond(
        get_collection(
            State(test.app_state()),
            Path(("B1T".to_string(), "Nope".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect only the inscriptions held by the address
#[tokio::test]
async fn lists_inscriptions_of_address() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_collection("Cats", &["1-100"])
        .build()
        .await?;
    let collection = test.ledger().insert_mock_collection("Dogs", &["1-100"]).await?;
    test.ledger()
        .insert_inscribed_item(collection.id, "000001", "mine1i0", "addr1", 1)
        .await?;
    test.ledger()
        .insert_inscribed_item(collection.id, "000002", "other1i0", "addr2", 2)
        .await?;

    let response = respond(
        get_inscriptions(
            State(test.app_state()),
            Path(("b1t".to_string(), "Dogs".to_string(), "addr1".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["address"], "addr1");
    assert_eq!(body["inscriptions"], serde_json::json!(["mine1i0"]));

    Ok(())
}

/// Expect the sanitized collection name and 1-based position of an inscription
#[tokio::test]
async fn validates_inscription() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_ledger_tables().build().await?;
    let collection = test
        .ledger()
        .insert_mock_collection("Cool Cats!", &["1-100"])
        .await?;
    test.ledger()
        .insert_inscribed_item(collection.id, "000010", "first1i0", "addr1", 1)
        .await?;
    test.ledger()
        .insert_inscribed_item(collection.id, "000020", "second1i0", "addr2", 2)
        .await?;

    let response = respond(validate(State(test.app_state()), Path("second1i0".to_string())).await);

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["collection_name"], "CoolCats");
    assert_eq!(body["number"], 2);
    assert_eq!(body["sn"], "000020");
    assert_eq!(body["inscription_address"], "addr2");

    Ok(())
}

/// Expect 404 when neither an inscription id nor a serial number matches
#[tokio::test]
async fn unknown_inscription_is_404() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_collection("Cats", &["1-100"])
        .build()
        .await?;

    let response = respond(validate(State(test.app_state()), Path("missing".to_string())).await);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
