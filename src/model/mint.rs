use serde::{Deserialize, Serialize};

use crate::model::broadcast::{BroadcastEntryDto, PendingTransactionDto};

fn default_broadcast() -> bool {
    true
}

/// Request body for `POST /rc001/mint_rc001/{ticker}`
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct MintRequestDto {
    pub receiving_address: String,
    /// Content type of the inscription, e.g. `text/html;charset=utf-8`
    pub meme_type: String,
    /// Inscription content as hex
    pub hex_data: String,
    pub sending_address: String,
    pub privkey: String,
    /// Funding transaction id
    pub utxo: String,
    pub vout: u32,
    pub script_hex: String,
    /// Value of the funding output in coin units, as a number or decimal string
    #[schema(value_type = String, example = "1.5")]
    pub utxo_amount: serde_json::Value,
    #[serde(default)]
    pub mint_address: Option<String>,
    /// Mint price in satoshis
    #[serde(default)]
    pub mint_price: Option<i64>,
    /// Submit the constructed transactions, defaults to `true`
    #[serde(default = "default_broadcast")]
    pub broadcast: bool,
    #[serde(default)]
    pub fee_per_kb: Option<i64>,
    #[serde(default)]
    pub dust_satoshis: Option<i64>,
    #[serde(default)]
    pub enable_inscription_dev_fee: Option<bool>,
    #[serde(default)]
    pub inscription_dev_fee_percent: Option<f64>,
    #[serde(default)]
    pub inscription_dev_fee_address: Option<String>,
}

/// Result of a mint
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct MintResponseDto {
    #[serde(
        rename = "finalTransaction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub final_transaction: Option<String>,
    #[serde(rename = "pendingTransactions")]
    pub pending_transactions: Vec<PendingTransactionDto>,
    pub instructions: String,
    pub broadcasted: bool,
    /// `success`, `partial` or `error` when the transactions were broadcast
    #[serde(
        rename = "broadcastStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub broadcast_status: Option<String>,
    #[serde(
        rename = "broadcastResults",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub broadcast_results: Option<Vec<BroadcastEntryDto>>,
}

/// Wallet used to fund a plain transfer
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct WalletDataDto {
    pub label: String,
    pub ticker: String,
    pub address: String,
    pub privkey: String,
    /// Spendable outputs, passed through to the constructor unchanged
    #[schema(value_type = Vec<Object>)]
    pub utxos: Vec<serde_json::Value>,
}

/// Request body for `POST /bitcore_lib/generate-tx`
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct GenerateTxRequestDto {
    #[serde(rename = "walletData")]
    pub wallet_data: WalletDataDto,
    #[serde(rename = "receivingAddress")]
    pub receiving_address: String,
    /// Amount in satoshis
    pub amount: i64,
    /// Fee in satoshis
    pub fee: i64,
}

/// Signed transfer transaction
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct GenerateTxResponseDto {
    pub success: bool,
    #[serde(rename = "txHex")]
    pub tx_hex: String,
}
