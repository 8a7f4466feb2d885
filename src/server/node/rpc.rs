use std::time::Duration;

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;

use crate::server::{
    error::node::NodeError,
    model::node::{BlockchainInfo, FeeEstimate, Unspent, WalletTransaction},
    node::NodeClient,
};

/// JSON-RPC 1.0 client for a bitcoind-compatible node.
#[derive(Clone)]
pub struct RpcNodeClient {
    http: reqwest::Client,
    url: String,
    user: String,
    password: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl RpcNodeClient {
    /// # Arguments
    /// - `url` - Node RPC url, e.g. `http://127.0.0.1:8332`
    /// - `wallet` - Optional wallet name, requests go to `<url>/wallet/<wallet>`
    /// - `timeout` - Upper bound for a single RPC call
    pub fn new(
        url: &str,
        user: &str,
        password: &str,
        wallet: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, NodeError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        let url = match wallet {
            Some(wallet) => format!("{}/wallet/{}", url.trim_end_matches('/'), wallet),
            None => url.to_string(),
        };

        Ok(Self {
            http,
            url,
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, NodeError> {
        self.call_nullable(method, params)
            .await?
            .ok_or_else(|| NodeError::InvalidResponse(format!("{}: missing result", method)))
    }

    /// Like [`Self::call`] but a `null` result is not an error.
    async fn call_nullable<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Option<T>, NodeError> {
        let payload = Payload {
            jsonrpc: "1.0",
            id: "mintgate",
            method,
            params,
        };

        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&payload)
            .send()
            .await?;

        // The node answers RPC errors with a 4xx/5xx status and an error object in the body
        let status = response.status();
        let body = response.text().await?;

        let envelope: RpcEnvelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(NodeError::InvalidResponse(format!("{}: {}", method, e)))
            }
            Err(_) => {
                tracing::debug!(method = %method, status = %status, "Node returned non JSON-RPC body");
                return Err(NodeError::Http(status.as_u16()));
            }
        };

        if let Some(error) = envelope.error {
            return Err(NodeError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(envelope.result)
    }
}

#[async_trait]
impl NodeClient for RpcNodeClient {
    async fn submit_raw_transaction(&self, raw_hex: &str) -> Result<String, NodeError> {
        self.call("sendrawtransaction", json!([raw_hex])).await
    }

    async fn list_unspent(
        &self,
        address: &str,
        min_confirmations: u32,
    ) -> Result<Vec<Unspent>, NodeError> {
        self.call(
            "listunspent",
            json!([min_confirmations, 9_999_999, [address]]),
        )
        .await
    }

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, NodeError> {
        self.call("getblockchaininfo", json!([])).await
    }

    async fn estimate_smart_fee(&self, conf_target: u32) -> Result<FeeEstimate, NodeError> {
        self.call("estimatesmartfee", json!([conf_target])).await
    }

    async fn get_raw_transaction(&self, txid: &str) -> Result<serde_json::Value, NodeError> {
        self.call("getrawtransaction", json!([txid, true])).await
    }

    async fn list_transactions(&self, count: u32) -> Result<Vec<WalletTransaction>, NodeError> {
        self.call("listtransactions", json!(["*", count, 0, true]))
            .await
    }

    async fn import_address(&self, address: &str) -> Result<(), NodeError> {
        self.call_nullable::<serde::de::IgnoredAny>("importaddress", json!([address, "", false]))
            .await?;
        Ok(())
    }
}
