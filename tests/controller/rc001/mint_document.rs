use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
};
use chrono::Duration;
use mintgate::server::controller::rc001::{mint_document, mint_document_hex};
use mintgate_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::test_utils::{body_json, body_text, respond, TestContextExt};

fn collection_path(name: &str) -> Path<(String, String)> {
    Path(("B1T".to_string(), name.to_string()))
}

/// Expect an html document carrying a freshly allocated serial number
#[tokio::test]
async fn renders_mint_document() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_audit_tables()
        .with_collection("Cats", &["1-100"])
        .build()
        .await?;

    let response =
        respond(mint_document(State(test.app_state()), collection_path("Cats")).await);

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some("text/html;charset=utf-8".as_bytes())
    );
    let html = body_text(response).await;
    assert!(html.contains("<title>Cats</title>"));
    assert!(html.contains("Catsparenti0"));

    let items = entity::prelude::Item::find().all(&test.db).await?;
    assert_eq!(items.len(), 1);
    assert!(html.contains(&items[0].sn));

    Ok(())
}

/// Expect the hex form of the document and a second distinct allocation
#[tokio::test]
async fn renders_mint_document_hex() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_audit_tables()
        .with_collection("Cats", &["1-2"])
        .build()
        .await?;
    let state = test.app_state();

    let first = body_json(respond(
        mint_document_hex(State(state.clone()), collection_path("Cats")).await,
    ))
    .await;
    let second = body_json(respond(
        mint_document_hex(State(state.clone()), collection_path("Cats")).await,
    ))
    .await;

    assert_eq!(first["status"], "success");
    let html = String::from_utf8(hex::decode(first["hex"].as_str().unwrap_or_default()).unwrap())
        .unwrap();
    assert!(html.contains("<title>Cats</title>"));
    assert_ne!(first["hex"], second["hex"]);

    Ok(())
}

/// Expect 404 for a collection that was never deployed
#[tokio::test]
async fn unknown_collection_is_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ledger_tables().build().await?;

    let response =
        respond(mint_document(State(test.app_state()), collection_path("Nope")).await);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 once every serial number is minted or recently reserved
#[tokio::test]
async fn exhausted_collection_is_409() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_audit_tables()
        .build()
        .await?;
    let collection = test.ledger().insert_mock_collection("Pair", &["1-2"]).await?;
    test.ledger()
        .insert_reserved_item(collection.id, "01", Duration::minutes(5))
        .await?;
    test.ledger()
        .insert_inscribed_item(collection.id, "02", "two1i0", "addr1", 1)
        .await?;

    let response =
        respond(mint_document(State(test.app_state()), collection_path("Pair")).await);

    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect a stale reservation to be handed out again
#[tokio::test]
async fn reuses_stale_reservation() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_ledger_tables()
        .with_audit_tables()
        .build()
        .await?;
    let collection = test.ledger().insert_mock_collection("Solo", &["1-1"]).await?;
    test.ledger()
        .insert_reserved_item(collection.id, "01", Duration::hours(25))
        .await?;

    let response =
        respond(mint_document(State(test.app_state()), collection_path("Solo")).await);

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect the 21st document request for a collection within the window to get 429
#[tokio::test]
async fn rate_limits_per_collection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .with_audit_tables()
        .with_collection("Cats", &["1-10000"])
        .build()
        .await?;
    let state = test.app_state();

    for _ in 0..20 {
        let response = respond(mint_document(State(state.clone()), collection_path("Cats")).await);
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = respond(mint_document(State(state.clone()), collection_path("Cats")).await);

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    Ok(())
}
