use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use mintgate::{
    model::mint::{GenerateTxRequestDto, WalletDataDto},
    server::controller::bitcore::generate_tx,
};
use mintgate_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;

use crate::util::{
    constructor::StaticConstructor,
    test_utils::{body_json, respond, TestContextExt},
};

fn transfer(ticker: &str, amount: i64, fee: i64) -> GenerateTxRequestDto {
    GenerateTxRequestDto {
        wallet_data: WalletDataDto {
            label: "main".to_string(),
            ticker: ticker.to_string(),
            address: "sender".to_string(),
            privkey: "secret-key".to_string(),
            utxos: vec![json!({ "txid": "abc", "vout": 0, "value": 100_000 })],
        },
        receiving_address: "receiver".to_string(),
        amount,
        fee,
    }
}

/// Expect the signed transfer and a tx log row without the private key
#[tokio::test]
async fn generates_transfer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_audit_tables().build().await?;

    let response = respond(
        generate_tx(State(test.app_state()), Json(transfer("b1t", 255, 10))).await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["txHex"], "00000000000000ff");

    let log = entity::prelude::TxLog::find().all(&test.db).await?;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].action, "generate-tx");
    assert!(!log[0]
        .metadata
        .as_deref()
        .unwrap_or_default()
        .contains("secret-key"));

    Ok(())
}

/// Expect 400 for a non-positive amount
#[tokio::test]
async fn zero_amount_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response =
        respond(generate_tx(State(test.app_state()), Json(transfer("B1T", 0, 10))).await);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a wallet of another ticker
#[tokio::test]
async fn unsupported_wallet_ticker_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response =
        respond(generate_tx(State(test.app_state()), Json(transfer("DOGE", 1, 1))).await);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the constructor's rejection passed through as 400
#[tokio::test]
async fn constructor_rejection_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_audit_tables().build().await?;
    let state = test.app_state_with(Arc::new(StaticConstructor::rejecting("dust output")));

    let response = respond(generate_tx(State(state), Json(transfer("B1T", 1, 1))).await);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "dust output");

    let log = entity::prelude::TxLog::find().all(&test.db).await?;
    assert_eq!(log[0].status, "error");

    Ok(())
}
