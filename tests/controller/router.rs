use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use mintgate::server::router;
use mintgate_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::test_utils::{body_json, TestContextExt};

/// Expect the liveness route to be reachable through the router
#[tokio::test]
async fn routes_health() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.app_state());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect the rc001 and node routes in the OpenAPI document
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.app_state());

    let response = app
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let document = body_json(response).await;
    for path in [
        "/rc001/collections",
        "/rc001/mint/{ticker}/{name}",
        "/rc001/mint_rc001/{ticker}",
        "/rc001/broadcast_pending/{ticker}",
        "/bitcore_lib/generate-tx",
        "/api/getlasttransactions/{ticker}/{address}",
        "/api/importaddress/{ticker}",
    ] {
        assert!(document["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}

/// Expect a JSON body without transactions to be rejected with 400
#[tokio::test]
async fn routes_empty_broadcast_to_400() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.app_state());

    let response = app
        .oneshot(
            Request::post("/rc001/broadcast_pending/B1T")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
