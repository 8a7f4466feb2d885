use serde::{Deserialize, Serialize};

fn default_continue_on_error() -> bool {
    true
}

/// A signed transaction waiting to be submitted to the node
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, utoipa::ToSchema)]
pub struct PendingTransactionDto {
    /// Transaction id the constructor computed for this transaction, if known
    #[serde(default)]
    pub txid: Option<String>,
    /// Raw transaction hex, entries without it are skipped on broadcast
    #[serde(default)]
    pub hex: Option<String>,
}

/// Request body for `POST /rc001/broadcast_pending/{ticker}`
///
/// `pendingTransactions` entries carrying a hex win over `raw_txs`. When none carry one the
/// request falls back to `raw_txs`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::ToSchema)]
pub struct BroadcastPendingRequestDto {
    #[serde(default, rename = "pendingTransactions", alias = "transactions")]
    pub pending_transactions: Vec<PendingTransactionDto>,
    #[serde(default, alias = "rawTxs")]
    pub raw_txs: Vec<String>,
    /// Keep submitting after a failed transaction, defaults to `true`
    #[serde(default = "default_continue_on_error")]
    pub continue_on_error: bool,
}

/// Outcome of a single submitted transaction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct BroadcastEntryDto {
    /// 1-based position in the submitted batch
    pub index: usize,
    pub requested_txid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_txid: Option<String>,
    /// `ok` or `error`
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a batch broadcast
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct BroadcastResponseDto {
    /// `success`, `partial` or `error`
    pub status: String,
    pub results: Vec<BroadcastEntryDto>,
    pub count: usize,
}
