use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mintgate::{
    model::node::{ImportAddressRequestDto, SendRawTransactionRequestDto},
    server::controller::node::{
        get_blockchain_info, get_last_transactions, health, import_address, list_unspent,
        node_health, send_raw_transaction,
    },
};
use mintgate_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;

use crate::util::test_utils::{body_json, respond, TestContextExt};

/// Expect 200 from the liveness endpoint
#[tokio::test]
async fn health_is_ok() {
    let response = health().await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

/// Expect the chain tip when the node answers
#[tokio::test]
async fn reports_node_health() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blockchain_info_endpoint(1234, 1)
        .build()
        .await?;

    let response = respond(node_health(State(test.app_state()), Path("b1t".to_string())).await);

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ticker"], "B1T");
    assert_eq!(body["blocks"], 1234);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a ticker this instance does not serve
#[tokio::test]
async fn rejects_unsupported_ticker() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = respond(node_health(State(test.app_state()), Path("BTC".to_string())).await);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unsupported ticker 'BTC'. Only B1T is supported.");

    Ok(())
}

/// Expect 503 when the node answers with a non JSON-RPC error
#[tokio::test]
async fn unavailable_node_is_503() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/")
                .with_status(502)
                .with_body("Bad Gateway")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let response =
        respond(get_blockchain_info(State(test.app_state()), Path("B1T".to_string())).await);

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    test.assert_mocks();

    Ok(())
}

/// Expect node outputs mapped to the listing format
#[tokio::test]
async fn lists_unspent_outputs() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.node().create_list_unspent_endpoint(
        "addr1",
        json!([{
            "txid": "abc",
            "vout": 1,
            "scriptPubKey": "76a914",
            "amount": 1.5,
            "confirmations": 3
        }]),
        1,
    );

    let response = respond(
        list_unspent(
            State(test.app_state()),
            Path(("B1T".to_string(), "addr1".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["network"], "B1T");
    assert_eq!(body["txs"][0]["script_hex"], "76a914");
    assert_eq!(body["txs"][0]["value"], 1.5);
    mock.assert();

    Ok(())
}

/// Expect the 11th request for an address within the window to be rejected with 429
#[tokio::test]
async fn rate_limits_unspent_listing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .node()
        .create_list_unspent_endpoint("addr1", json!([]), 10);
    let state = test.app_state();

    for _ in 0..10 {
        let response = respond(
            list_unspent(
                State(state.clone()),
                Path(("B1T".to_string(), "addr1".to_string())),
            )
            .await,
        );
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = respond(
        list_unspent(
            State(state.clone()),
            Path(("B1T".to_string(), "addr1".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    mock.assert();

    Ok(())
}

/// Expect the accepted txid and a tx log row
#[tokio::test]
async fn sends_raw_transaction() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_endpoint("aa", "txid-aa", 1)
        .build()
        .await?;

    let response = respond(
        send_raw_transaction(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(SendRawTransactionRequestDto {
                raw_tx: "aa".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "txid": "txid-aa" }));

    let log = entity::prelude::TxLog::find().all(&test.db).await?;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].status, "ok");
    test.assert_mocks();

    Ok(())
}

/// Expect 400 with the node's message when the transaction is rejected
#[tokio::test]
async fn rejected_raw_transaction_is_400() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_audit_tables()
        .with_send_raw_transaction_error_endpoint("aa", "bad-txns-inputs-missingorspent", 1)
        .build()
        .await?;

    let response = respond(
        send_raw_transaction(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(SendRawTransactionRequestDto {
                raw_tx: "aa".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("bad-txns-inputs-missingorspent"));
    test.assert_mocks();

    Ok(())
}

/// Expect the address's transactions deduplicated, newest first, with formatted amounts
#[tokio::test]
async fn lists_last_transactions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.node().create_rpc_endpoint(
        "listtransactions",
        json!(["*", 10, 0, true]),
        json!([
            { "address": "addr1", "category": "receive", "txid": "aa", "amount": 1.5, "confirmations": 2, "time": 100 },
            { "address": "addr1", "category": "send", "txid": "aa", "amount": -1.5, "confirmations": 5, "time": 100 },
            { "address": "addr2", "category": "receive", "txid": "bb", "amount": 3.0, "confirmations": 1, "time": 300 },
            { "address": "addr1", "category": "receive", "txid": "cc", "amount": 0.1, "confirmations": 1, "time": 200 }
        ]),
        1,
    );

    let response = respond(
        get_last_transactions(
            State(test.app_state()),
            Path(("B1T".to_string(), "addr1".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["network"], "B1T");
    assert_eq!(body["address"], "addr1");
    assert_eq!(body["transactions"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["transactions"][0]["txid"], "cc");
    assert_eq!(body["transactions"][0]["amount"], "0.10000000");
    assert_eq!(body["transactions"][1]["txid"], "aa");
    assert_eq!(body["transactions"][1]["confirmations"], 5);
    assert_eq!(body["transactions"][1]["amount"], "-1.50000000");
    mock.assert();

    Ok(())
}

/// Expect the 11th last transactions request for an address within the window to be rejected
#[tokio::test]
async fn rate_limits_last_transactions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.node().create_rpc_endpoint(
        "listtransactions",
        json!(["*", 10, 0, true]),
        json!([]),
        10,
    );
    let state = test.app_state();

    for _ in 0..10 {
        let response = respond(
            get_last_transactions(
                State(state.clone()),
                Path(("B1T".to_string(), "addr1".to_string())),
            )
            .await,
        );
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = respond(
        get_last_transactions(
            State(state.clone()),
            Path(("B1T".to_string(), "addr1".to_string())),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    mock.assert();

    Ok(())
}

/// Expect the imported address echoed back
#[tokio::test]
async fn imports_address() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.node().create_rpc_endpoint(
        "importaddress",
        json!(["addr1", "", false]),
        json!(null),
        1,
    );

    let response = respond(
        import_address(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(ImportAddressRequestDto {
                address: "addr1".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "status": "success", "imported_address": "addr1" })
    );
    mock.assert();

    Ok(())
}

/// Expect 400 without calling the node when the address is blank
#[tokio::test]
async fn blank_import_address_is_400() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.node().create_rpc_endpoint(
        "importaddress",
        json!(["  ", "", false]),
        json!(null),
        0,
    );

    let response = respond(
        import_address(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(ImportAddressRequestDto {
                address: "  ".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    mock.assert();

    Ok(())
}

/// Expect the node's message when the import is rejected
#[tokio::test]
async fn rejected_import_is_400() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.node().create_rpc_error_endpoint(
        "importaddress",
        json!(["bogus", "", false]),
        -5,
        "Invalid address or script",
        1,
    );

    let response = respond(
        import_address(
            State(test.app_state()),
            Path("B1T".to_string()),
            Json(ImportAddressRequestDto {
                address: "bogus".to_string(),
            }),
        )
        .await,
    );

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("Invalid address or script"));
    mock.assert();

    Ok(())
}
