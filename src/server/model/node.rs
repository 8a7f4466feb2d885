use serde::Deserialize;

use crate::model::node::{BlockchainInfoDto, FeeEstimateDto, UnspentDto, WalletTransactionDto};

/// Entry of the node's `listunspent` result.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Unspent {
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    pub amount: f64,
    #[serde(default)]
    pub confirmations: i64,
}

/// Subset of the node's `getblockchaininfo` result.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: i64,
    pub headers: i64,
}

/// Result of the node's `estimatesmartfee`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FeeEstimate {
    #[serde(default)]
    pub feerate: Option<f64>,
    #[serde(default)]
    pub blocks: Option<i64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Entry of the node's `listtransactions` result.
///
/// A transaction touching several wallet addresses appears once per address and category.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WalletTransaction {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub txid: String,
    pub amount: f64,
    #[serde(default)]
    pub confirmations: i64,
    #[serde(default)]
    pub time: Option<i64>,
}

/// Transactions of `address`, one per txid, newest first.
///
/// A duplicated txid keeps the entry with more confirmations, then the earlier time.
pub fn latest_for_address(
    transactions: Vec<WalletTransaction>,
    address: &str,
) -> Vec<WalletTransaction> {
    let mut unique: Vec<WalletTransaction> = Vec::new();

    for tx in transactions
        .into_iter()
        .filter(|tx| tx.address.as_deref() == Some(address))
    {
        match unique.iter_mut().find(|kept| kept.txid == tx.txid) {
            Some(kept) => {
                let earlier = tx.time.unwrap_or(i64::MAX) < kept.time.unwrap_or(i64::MAX);
                if tx.confirmations > kept.confirmations
                    || (tx.confirmations == kept.confirmations && earlier)
                {
                    *kept = tx;
                }
            }
            None => unique.push(tx),
        }
    }

    unique.sort_by_key(|tx| std::cmp::Reverse(tx.time.unwrap_or(0)));
    unique
}

impl From<WalletTransaction> for WalletTransactionDto {
    fn from(tx: WalletTransaction) -> Self {
        Self {
            txid: tx.txid,
            amount: format!("{:.8}", tx.amount),
            confirmations: tx.confirmations,
            time: tx.time,
            address: tx.address.unwrap_or_default(),
        }
    }
}

impl From<Unspent> for UnspentDto {
    fn from(unspent: Unspent) -> Self {
        Self {
            txid: unspent.txid,
            vout: unspent.vout,
            script_hex: unspent.script_pub_key,
            value: unspent.amount,
            confirmations: unspent.confirmations,
        }
    }
}

impl From<BlockchainInfo> for BlockchainInfoDto {
    fn from(info: BlockchainInfo) -> Self {
        Self {
            chain: info.chain,
            blocks: info.blocks,
            headers: info.headers,
        }
    }
}

impl From<FeeEstimate> for FeeEstimateDto {
    fn from(estimate: FeeEstimate) -> Self {
        Self {
            feerate: estimate.feerate,
            blocks: estimate.blocks,
            errors: estimate.errors,
        }
    }
}
