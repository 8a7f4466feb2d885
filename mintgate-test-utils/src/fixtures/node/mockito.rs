//! Mocked node JSON-RPC endpoints.
//!
//! The node serves every method on `POST /`, so endpoints are told apart by matching the
//! `method` and `params` of the request body.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::fixtures::node::NodeFixtures;

impl<'a> NodeFixtures<'a> {
    /// Create an endpoint answering `method` called with `params` with `result`.
    ///
    /// # Arguments
    /// - `method` - RPC method name, e.g. `getblockchaininfo`
    /// - `params` - Exact params array the request must carry
    /// - `result` - Value returned in the `result` field
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_rpc_endpoint(
        &mut self,
        method: &str,
        params: Value,
        result: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(
                json!({ "method": method, "params": params }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "result": result, "error": null, "id": "mintgate" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an endpoint answering `method` with a JSON-RPC error object.
    ///
    /// The node pairs RPC errors with HTTP status 500.
    pub fn create_rpc_error_endpoint(
        &mut self,
        method: &str,
        params: Value,
        code: i64,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(
                json!({ "method": method, "params": params }),
            ))
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "result": null,
                    "error": { "code": code, "message": message },
                    "id": "mintgate"
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// `sendrawtransaction` of `raw_hex` accepted as `txid`.
    pub fn create_send_raw_transaction_endpoint(
        &mut self,
        raw_hex: &str,
        txid: &str,
        expected_requests: usize,
    ) -> Mock {
        self.create_rpc_endpoint(
            "sendrawtransaction",
            json!([raw_hex]),
            json!(txid),
            expected_requests,
        )
    }

    /// `sendrawtransaction` of `raw_hex` rejected by the node.
    pub fn create_send_raw_transaction_error_endpoint(
        &mut self,
        raw_hex: &str,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.create_rpc_error_endpoint(
            "sendrawtransaction",
            json!([raw_hex]),
            -26,
            message,
            expected_requests,
        )
    }

    /// `getblockchaininfo` reporting a synced `main` chain at `blocks`.
    pub fn create_blockchain_info_endpoint(&mut self, blocks: i64, expected_requests: usize) -> Mock {
        self.create_rpc_endpoint(
            "getblockchaininfo",
            json!([]),
            json!({ "chain": "main", "blocks": blocks, "headers": blocks }),
            expected_requests,
        )
    }

    /// `listunspent` of `address` returning `unspent`.
    pub fn create_list_unspent_endpoint(
        &mut self,
        address: &str,
        unspent: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_rpc_endpoint(
            "listunspent",
            json!([0, 9_999_999, [address]]),
            unspent,
            expected_requests,
        )
    }
}
