use std::{sync::Arc, time::Duration};

use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use mintgate::server::{
    constructor::TransactionConstructor, error::Error, model::app::AppState,
    node::rpc::RpcNodeClient, rate_limit::RateLimiter, service::allocator::CollectionLocks,
};
use mintgate_test_utils::prelude::*;

use crate::util::constructor::StaticConstructor;

pub trait TestContextExt {
    /// State wired to the test database and mock node, minting with `constructor`.
    fn app_state_with(&self, constructor: Arc<dyn TransactionConstructor>) -> AppState;

    /// State with a constructor producing the transactions `aa` and `bb`.
    fn app_state(&self) -> AppState {
        self.app_state_with(Arc::new(StaticConstructor::with_pending(&["aa", "bb"])))
    }
}

impl TestContextExt for TestContext {
    fn app_state_with(&self, constructor: Arc<dyn TransactionConstructor>) -> AppState {
        let node = RpcNodeClient::new(
            &self.server_url(),
            TEST_RPC_USER,
            TEST_RPC_PASSWORD,
            None,
            Duration::from_secs(5),
        )
        .expect("Failed to build node client");

        AppState {
            db: self.db.clone(),
            node: Arc::new(node),
            constructor,
            rate_limiter: RateLimiter::new(),
            collection_locks: CollectionLocks::new(),
            supported_ticker: TEST_TICKER.to_string(),
        }
    }
}

/// Render a handler result the way axum would.
pub fn respond<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}
