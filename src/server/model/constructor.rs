use serde::Deserialize;

use crate::model::broadcast::PendingTransactionDto;

/// Optional fee and policy overrides forwarded to the transaction constructor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstructorPolicy {
    /// Fee rate in satoshis per kB
    pub fee_per_kb: Option<i64>,
    pub dust_satoshis: Option<i64>,
    pub enable_inscription_dev_fee: Option<bool>,
    pub inscription_dev_fee_percent: Option<f64>,
    pub inscription_dev_fee_address: Option<String>,
}

impl ConstructorPolicy {
    /// Environment variables understood by the constructor, only for overrides that are set.
    pub fn env_overrides(&self) -> Vec<(&'static str, String)> {
        let mut vars = Vec::new();

        if let Some(fee_per_kb) = self.fee_per_kb {
            vars.push(("FEE_PER_KB", fee_per_kb.to_string()));
        }
        if let Some(dust) = self.dust_satoshis {
            vars.push(("DUST_SATOSHIS", dust.to_string()));
        }
        if let Some(enable) = self.enable_inscription_dev_fee {
            vars.push(("ENABLE_INSCRIPTION_DEV_FEE", enable.to_string()));
        }
        if let Some(percent) = self.inscription_dev_fee_percent {
            vars.push(("INSCRIPTION_DEV_FEE_PERCENT", percent.to_string()));
        }
        if let Some(address) = &self.inscription_dev_fee_address {
            vars.push(("INSCRIPTION_DEV_FEE_ADDRESS", address.clone()));
        }

        vars
    }
}

/// Payment to the collection's mint address included in the mint transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct MintPayment {
    pub address: String,
    pub price_sats: i64,
}

/// Ordinal mint request for the transaction constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct MintRequest {
    pub receiving_address: String,
    pub content_type: String,
    pub content_hex: String,
    pub sending_address: String,
    pub privkey: String,
    pub utxo: String,
    pub vout: u32,
    pub script_hex: String,
    pub utxo_amount_sats: u64,
    pub payment: Option<MintPayment>,
    pub policy: ConstructorPolicy,
}

/// Signed transaction produced by the constructor.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PendingTransaction {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub hex: String,
}

impl From<PendingTransaction> for PendingTransactionDto {
    fn from(pending: PendingTransaction) -> Self {
        Self {
            txid: pending.txid,
            hex: Some(pending.hex),
        }
    }
}

/// Constructor response for a mint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstructedMint {
    pub final_txid: Option<String>,
    /// Transactions in the order they must be broadcast
    pub pending: Vec<PendingTransaction>,
    pub instructions: String,
}
