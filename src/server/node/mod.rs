//! Blockchain node interface.
//!
//! [`NodeClient`] is the capability the broadcast engine and the node controllers depend on;
//! [`rpc::RpcNodeClient`] implements it over the node's JSON-RPC HTTP interface.

pub mod rpc;

use async_trait::async_trait;

use crate::server::{
    error::node::NodeError,
    model::node::{BlockchainInfo, FeeEstimate, Unspent, WalletTransaction},
};

#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Submit a signed raw transaction, returning the txid the node accepted.
    async fn submit_raw_transaction(&self, raw_hex: &str) -> Result<String, NodeError>;

    /// Unspent outputs of `address` with at least `min_confirmations`.
    async fn list_unspent(
        &self,
        address: &str,
        min_confirmations: u32,
    ) -> Result<Vec<Unspent>, NodeError>;

    async fn get_blockchain_info(&self) -> Result<BlockchainInfo, NodeError>;

    async fn estimate_smart_fee(&self, conf_target: u32) -> Result<FeeEstimate, NodeError>;

    /// Verbose transaction lookup, passed through unmodified.
    async fn get_raw_transaction(&self, txid: &str) -> Result<serde_json::Value, NodeError>;

    /// The wallet's `count` most recent transactions, watch-only addresses included.
    async fn list_transactions(&self, count: u32) -> Result<Vec<WalletTransaction>, NodeError>;

    /// Add `address` to the wallet as watch-only, without rescanning.
    async fn import_address(&self, address: &str) -> Result<(), NodeError>;
}
