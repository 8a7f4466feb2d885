use serde::{Deserialize, Serialize};

/// Spendable output of an address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct UnspentDto {
    pub txid: String,
    pub vout: u32,
    pub script_hex: String,
    /// Value in coin units
    pub value: f64,
    pub confirmations: i64,
}

/// Spendable outputs of an address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct UnspentListDto {
    pub network: String,
    pub address: String,
    pub txs: Vec<UnspentDto>,
}

/// Wallet transaction of an address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct WalletTransactionDto {
    pub txid: String,
    /// Amount in coin units with 8 decimals, negative when sent
    pub amount: String,
    pub confirmations: i64,
    /// Unix time, absent when the node did not report one
    pub time: Option<i64>,
    pub address: String,
}

/// Recent wallet transactions of an address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct WalletTransactionListDto {
    pub network: String,
    pub address: String,
    pub transactions: Vec<WalletTransactionDto>,
}

/// Request body for `POST /api/importaddress/{ticker}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::ToSchema)]
pub struct ImportAddressRequestDto {
    #[serde(default)]
    pub address: String,
}

/// Address added to the node wallet as watch-only
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct ImportAddressDto {
    pub status: String,
    pub imported_address: String,
}

/// Chain tip reported by the node
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct BlockchainInfoDto {
    pub chain: String,
    pub blocks: i64,
    pub headers: i64,
}

/// Node reachability
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct NodeHealthDto {
    pub status: String,
    pub ticker: String,
    pub chain: String,
    pub blocks: i64,
    pub headers: i64,
}

/// Fee rate estimate in coin units per kB
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct FeeEstimateDto {
    pub feerate: Option<f64>,
    pub blocks: Option<i64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Request body for `POST /api/sendrawtransaction/{ticker}`
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct SendRawTransactionRequestDto {
    pub raw_tx: String,
}

/// Transaction id accepted by the node
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct TxidDto {
    pub txid: String,
}
