use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mintgate::{
    model::broadcast::{BroadcastPendingRequestDto, PendingTransactionDto},
    server::controller::rc001::broadcast_pending,
};
use mintgate_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::test_utils::{body_json, respond, TestContextExt};

fn pending(txid: &str, hex: &str) -> PendingTransactionDto {
    PendingTransactionDto {
        txid: Some(txid.to_string()),
        hex: Some(hex.to_string()),
    }
}

/// Expect a partial batch when the middle transaction is rejected
#[tokio::test]
async fn reports_partial_batch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("aa", "sent-aa", 1)
        .with_send_raw_transaction_error_endpoint("bb", "bad-txns", 1)
        .with_send_raw_transaction_endpoint("cc", "sent-cc", 1)
        .build()
        .await?;

    let response = respond(
        broadcast_pending(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(BroadcastPendingRequestDto {
                pending_transactions: vec![
                    pending("t1", "aa"),
                    pending("t2", "bb"),
                    pending("t3", "cc"),
                ],
                raw_txs: vec!["dd".to_string()],
                continue_on_error: true,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "partial");
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"][0]["sent_txid"], "sent-aa");
    assert_eq!(body["results"][1]["status"], "error");
    assert_eq!(body["results"][1]["requested_txid"], "t2");
    assert_eq!(body["results"][2]["index"], 3);

    let log = entity::prelude::TxLog::find().all(&test.db).await?;
    assert_eq!(log.len(), 3);
    test.assert_mocks();

    Ok(())
}

/// Expect the batch to stop at the first failure when not continuing
#[tokio::test]
async fn stops_at_first_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_error_endpoint("aa", "bad-txns", 1)
        .with_send_raw_transaction_endpoint("bb", "sent-bb", 0)
        .build()
        .await?;

    let response = respond(
        broadcast_pending(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(BroadcastPendingRequestDto {
                pending_transactions: Vec::new(),
                raw_txs: vec!["aa".to_string(), "bb".to_string()],
                continue_on_error: false,
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["requested_txid"], serde_json::Value::Null);
    test.assert_mocks();

    Ok(())
}

/// Expect blank hex to be reported without reaching the node
#[tokio::test]
async fn blank_hex_is_invalid() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("aa", "sent-aa", 1)
        .build()
        .await?;

    let response = respond(
        broadcast_pending(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(BroadcastPendingRequestDto {
                pending_transactions: Vec::new(),
                raw_txs: vec!["  ".to_string(), " aa ".to_string()],
                continue_on_error: true,
            }),
        )
        .await,
    );

    let body = body_json(response).await;
    assert_eq!(body["status"], "partial");
    assert_eq!(body["results"][0]["error"], "invalid hex");
    assert_eq!(body["results"][1]["sent_txid"], "sent-aa");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 when no transaction is supplied
#[tokio::test]
async fn empty_batch_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = respond(
        broadcast_pending(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(BroadcastPendingRequestDto::default()),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the request body defaults to continue on error
#[test]
fn request_defaults_to_continue_on_error() {
    let request: BroadcastPendingRequestDto =
        serde_json::from_str(r#"{"raw_txs": ["aa"]}"#).unwrap();

    assert!(request.continue_on_error);
    assert!(request.pending_transactions.is_empty());
}

/// Expect pending entries without hex to be skipped
#[tokio::test]
async fn skips_pending_without_hex() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("aa", "sent-aa", 1)
        .build()
        .await?;

    let payload: BroadcastPendingRequestDto = serde_json::from_str(
        r#"{"pendingTransactions": [{"txid": "t0"}, {"txid": "t1", "hex": ""}, {"txid": "t2", "hex": "aa"}]}"#,
    )
    .unwrap();
    assert_eq!(payload.pending_transactions[0].hex, None);

    let response = respond(
        broadcast_pending(State(test.app_state()), Path("B1T".to_string()), Json(payload)).await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["requested_txid"], "t2");
    assert_eq!(body["results"][0]["sent_txid"], "sent-aa");
    test.assert_mocks();

    Ok(())
}

/// Expect raw_txs to be used when no pending entry carries hex
#[tokio::test]
async fn falls_back_to_raw_txs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("dd", "sent-dd", 1)
        .build()
        .await?;

    let payload: BroadcastPendingRequestDto =
        serde_json::from_str(r#"{"pendingTransactions": [{"txid": "t0"}], "raw_txs": ["dd"]}"#)
            .unwrap();

    let response = respond(
        broadcast_pending(State(test.app_state()), Path("B1T".to_string()), Json(payload)).await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["results"][0]["sent_txid"], "sent-dd");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 when every pending entry lacks hex and raw_txs is empty
#[tokio::test]
async fn hexless_batch_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let payload: BroadcastPendingRequestDto =
        serde_json::from_str(r#"{"pendingTransactions": [{"txid": "t0"}]}"#).unwrap();

    let response = respond(
        broadcast_pending(State(test.app_state()), Path("B1T".to_string()), Json(payload)).await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
