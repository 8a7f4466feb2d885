use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mintgate::{model::mint::MintRequestDto, server::controller::rc001::mint};
use mintgate_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;

use crate::util::{
    constructor::StaticConstructor,
    test_utils::{body_json, respond, TestContextExt},
};

fn mint_request(broadcast: bool) -> MintRequestDto {
    MintRequestDto {
        receiving_address: "receiver".to_string(),
        meme_type: "text/html;charset=utf-8".to_string(),
        hex_data: "3c68746d6c3e".to_string(),
        sending_address: "sender".to_string(),
        privkey: "privkey".to_string(),
        utxo: "fundingtxid".to_string(),
        vout: 0,
        script_hex: "76a914".to_string(),
        utxo_amount: json!("1.5"),
        mint_address: Some("Cats-mint-address".to_string()),
        mint_price: Some(100_000),
        broadcast,
        fee_per_kb: None,
        dust_satoshis: None,
        enable_inscription_dev_fee: None,
        inscription_dev_fee_percent: None,
        inscription_dev_fee_address: None,
    }
}

/// Expect both constructed transactions to be broadcast in order
#[tokio::test]
async fn mints_and_broadcasts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("aa", "aa-txid", 1)
        .with_send_raw_transaction_endpoint("bb", "bb-txid", 1)
        .build()
        .await?;

    let response = respond(
        mint(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(mint_request(true)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["finalTransaction"], "bb-txid");
    assert_eq!(body["broadcasted"], true);
    assert_eq!(body["broadcastStatus"], "success");
    assert_eq!(body["pendingTransactions"][0]["hex"], "aa");

    let mints = entity::prelude::MintLog::find().all(&test.db).await?;
    assert_eq!(mints.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect the constructed transactions back without touching the node
#[tokio::test]
async fn mints_without_broadcast() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("aa", "aa-txid", 0)
        .build()
        .await?;

    let response = respond(
        mint(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(mint_request(false)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["broadcasted"], false);
    assert!(body.get("broadcastStatus").is_none());
    assert_eq!(body["pendingTransactions"].as_array().map(Vec::len), Some(2));
    test.assert_mocks();

    Ok(())
}

/// Expect 400 carrying the constructor's message verbatim
#[tokio::test]
async fn constructor_rejection_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_audit_tables().build().await?;
    let state = test.app_state_with(Arc::new(StaticConstructor::rejecting(
        "not enough funds",
    )));

    let response = respond(
        mint(
            State(state),
            Path("B1T".to_string()),
            Json(mint_request(true)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "not enough funds");

    Ok(())
}

/// Expect 400 for inscription content that is not hex
#[tokio::test]
async fn invalid_hex_data_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut request = mint_request(false);
    request.hex_data = "not hex".to_string();

    let response = respond(
        mint(State(test.app_state()), Path("B1T".to_string()), Json(request)).await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the 7th mint from one sending address within a minute to get 429
#[tokio::test]
async fn rate_limits_per_sending_address() -> Result<(), TestError> {
    let test = TestBuilder::new().with_audit_tables().build().await?;
    let state = test.app_state();

    for _ in 0..6 {
        let response = respond(
            mint(
                State(state.clone()),
                Path("B1T".to_string()),
                Json(mint_request(false)),
            )
            .await,
        );
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = respond(
        mint(
            State(state.clone()),
            Path("B1T".to_string()),
            Json(mint_request(false)),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    Ok(())
}
