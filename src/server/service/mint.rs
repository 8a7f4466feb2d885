//! Mint flow: construct the commit/reveal transactions, then optionally broadcast them.

use std::str::FromStr;

use dioxus_logger::tracing;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        broadcast::PendingTransactionDto,
        mint::{MintRequestDto, MintResponseDto},
    },
    server::{
        constructor::TransactionConstructor,
        data::audit::{ErrorLogEntry, MintLogEntry},
        error::{request::RequestError, Error},
        model::{
            broadcast::{BatchItem, BatchResult},
            constructor::{ConstructedMint, ConstructorPolicy, MintPayment, MintRequest},
        },
        node::NodeClient,
        service::{audit::AuditLog, broadcast::BroadcastEngine},
    },
};

const SATOSHIS_PER_COIN: u64 = 100_000_000;

/// Convert a coin amount given as JSON number or decimal string to satoshis, rounding down.
pub fn utxo_amount_to_sats(amount: &serde_json::Value) -> Result<u64, RequestError> {
    let invalid = |reason: &str| RequestError::InvalidField {
        field: "utxo_amount".to_string(),
        reason: reason.to_string(),
    };

    let text = match amount {
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::String(text) => text.trim().to_string(),
        serde_json::Value::Null => return Err(RequestError::MissingField("utxo_amount".to_string())),
        _ => return Err(invalid("expected a number or decimal string")),
    };

    let coins = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| invalid("not a decimal number"))?;

    if coins.is_sign_negative() {
        return Err(invalid("must not be negative"));
    }

    coins
        .checked_mul(Decimal::from(SATOSHIS_PER_COIN))
        .map(|sats| sats.floor())
        .and_then(|sats| sats.to_u64())
        .ok_or_else(|| invalid("amount too large"))
}

fn require(field: &str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::MissingField(field.to_string()));
    }
    Ok(())
}

/// Validate a mint request body and turn it into a constructor request.
pub fn build_mint_request(dto: MintRequestDto) -> Result<MintRequest, RequestError> {
    require("receiving_address", &dto.receiving_address)?;
    require("meme_type", &dto.meme_type)?;
    require("hex_data", &dto.hex_data)?;
    require("sending_address", &dto.sending_address)?;
    require("privkey", &dto.privkey)?;
    require("utxo", &dto.utxo)?;
    require("script_hex", &dto.script_hex)?;

    let content_hex = dto.hex_data.trim().to_string();
    hex::decode(&content_hex).map_err(|e| RequestError::InvalidField {
        field: "hex_data".to_string(),
        reason: e.to_string(),
    })?;

    let utxo_amount_sats = utxo_amount_to_sats(&dto.utxo_amount)?;

    let payment = match (dto.mint_address, dto.mint_price) {
        (Some(address), Some(price_sats)) if !address.trim().is_empty() && price_sats > 0 => {
            Some(MintPayment {
                address: address.trim().to_string(),
                price_sats,
            })
        }
        _ => None,
    };

    Ok(MintRequest {
        receiving_address: dto.receiving_address,
        content_type: dto.meme_type,
        content_hex,
        sending_address: dto.sending_address,
        privkey: dto.privkey,
        utxo: dto.utxo,
        vout: dto.vout,
        script_hex: dto.script_hex,
        utxo_amount_sats,
        payment,
        policy: ConstructorPolicy {
            fee_per_kb: dto.fee_per_kb,
            dust_satoshis: dto.dust_satoshis,
            enable_inscription_dev_fee: dto.enable_inscription_dev_fee,
            inscription_dev_fee_percent: dto.inscription_dev_fee_percent,
            inscription_dev_fee_address: dto.inscription_dev_fee_address,
        },
    })
}

pub struct MintOrchestrator<'a> {
    db: &'a DatabaseConnection,
    node: &'a dyn NodeClient,
    constructor: &'a dyn TransactionConstructor,
}

impl<'a> MintOrchestrator<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        node: &'a dyn NodeClient,
        constructor: &'a dyn TransactionConstructor,
    ) -> Self {
        Self {
            db,
            node,
            constructor,
        }
    }

    /// Construct a mint and, when `broadcast` is set, submit its transactions in order.
    ///
    /// Constructor failures are returned as is and nothing is broadcast. Broadcasting keeps
    /// going past failed transactions; their outcome is part of the response, not an error.
    pub async fn mint(
        &self,
        ticker: &str,
        request: &MintRequest,
        broadcast: bool,
    ) -> Result<MintResponseDto, Error> {
        let constructed = match self.constructor.construct_mint(request).await {
            Ok(constructed) => constructed,
            Err(e) => {
                tracing::warn!(ticker = %ticker, "Mint construction failed: {}", e);
                self.record_mint(ticker, request, None, Some(e.to_string()))
                    .await;
                AuditLog::new(self.db)
                    .record_error(ErrorLogEntry {
                        context: "mint_rc001".to_string(),
                        message: e.to_string(),
                        details: Some(format!(
                            "ticker {} sending_address {}",
                            ticker, request.sending_address
                        )),
                        extra: None,
                    })
                    .await;

                return Err(e.into());
            }
        };

        let batch = if broadcast {
            let items = constructed
                .pending
                .iter()
                .cloned()
                .map(|pending| BatchItem {
                    requested_id: pending.txid,
                    raw_hex: pending.hex,
                })
                .collect();

            let result = BroadcastEngine::new(self.node)
                .broadcast_batch(items, true)
                .await;
            self.record_broadcast(ticker, &constructed, &result).await;

            Some(result)
        } else {
            None
        };

        self.record_mint(ticker, request, Some(&constructed), None)
            .await;

        Ok(MintResponseDto {
            final_transaction: constructed.final_txid,
            pending_transactions: constructed.pending.into_iter().map(Into::into).collect(),
            instructions: constructed.instructions,
            broadcasted: batch.is_some(),
            broadcast_status: batch
                .as_ref()
                .map(|result| result.status.as_str().to_string()),
            broadcast_results: batch
                .map(|result| result.entries.into_iter().map(Into::into).collect()),
        })
    }

    async fn record_broadcast(&self, ticker: &str, constructed: &ConstructedMint, result: &BatchResult) {
        let raw_hexes: Vec<String> = constructed
            .pending
            .iter()
            .map(|pending| pending.hex.clone())
            .collect();

        AuditLog::new(self.db)
            .record_batch(ticker, "mint_broadcast", result, &raw_hexes)
            .await;
    }

    async fn record_mint(
        &self,
        ticker: &str,
        request: &MintRequest,
        constructed: Option<&ConstructedMint>,
        error: Option<String>,
    ) {
        let pending_txs = constructed.and_then(|constructed| {
            let pending: Vec<PendingTransactionDto> =
                constructed.pending.iter().cloned().map(Into::into).collect();
            serde_json::to_string(&pending).ok()
        });

        AuditLog::new(self.db)
            .record_mint(MintLogEntry {
                ticker: ticker.to_string(),
                receiving_address: request.receiving_address.clone(),
                sending_address: request.sending_address.clone(),
                content_type: request.content_type.clone(),
                content_bytes: (request.content_hex.len() / 2) as i64,
                utxo: request.utxo.clone(),
                vout: request.vout as i32,
                utxo_amount_sats: request.utxo_amount_sats as i64,
                final_txid: constructed.and_then(|c| c.final_txid.clone()),
                pending_txs,
                ok: error.is_none(),
                error,
            })
            .await;
    }
}
