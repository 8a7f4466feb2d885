//! Best-effort audit trail.
//!
//! Every write is a side effect of some other operation: failures are logged and swallowed so
//! the operation that triggered the write is never affected.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::audit::{
        AllocationLogEntry, AuditRepository, ErrorLogEntry, MintLogEntry, TxLogEntry,
    },
    model::broadcast::{BatchOutcome, BatchResult},
    util::time::now,
};

/// Longest text stored in an audit column, in characters.
pub const MAX_AUDIT_TEXT: usize = 10_000;

fn truncate(text: String) -> String {
    match text.char_indices().nth(MAX_AUDIT_TEXT) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text,
    }
}

fn truncate_opt(text: Option<String>) -> Option<String> {
    text.map(truncate)
}

pub struct AuditLog<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLog<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_tx(&self, entry: TxLogEntry) {
        let entry = TxLogEntry {
            ticker: truncate(entry.ticker),
            action: truncate(entry.action),
            status: truncate(entry.status),
            txid: truncate_opt(entry.txid),
            raw_tx: truncate_opt(entry.raw_tx),
            metadata: truncate_opt(entry.metadata),
            error: truncate_opt(entry.error),
        };

        if let Err(e) = AuditRepository::new(self.db)
            .insert_tx_log(entry, now())
            .await
        {
            tracing::warn!("Failed to write tx log: {}", e);
        }
    }

    /// One tx log row per batch entry, paired with the raw hex submitted at its position.
    ///
    /// # Arguments
    /// - `action` - Endpoint or flow that submitted the batch
    /// - `result` - Outcome of the batch
    /// - `raw_hexes` - Raw transactions in submission order
    pub async fn record_batch(
        &self,
        ticker: &str,
        action: &str,
        result: &BatchResult,
        raw_hexes: &[String],
    ) {
        for entry in &result.entries {
            let (status, txid, error) = match &entry.outcome {
                BatchOutcome::Sent { txid } => ("ok", Some(txid.clone()), None),
                BatchOutcome::Failed { error } => {
                    ("error", entry.requested_id.clone(), Some(error.clone()))
                }
            };

            self.record_tx(TxLogEntry {
                ticker: ticker.to_string(),
                action: action.to_string(),
                status: status.to_string(),
                txid,
                raw_tx: raw_hexes.get(entry.index - 1).cloned(),
                metadata: Some(format!("index {}", entry.index)),
                error,
            })
            .await;
        }
    }

    pub async fn record_mint(&self, entry: MintLogEntry) {
        let entry = MintLogEntry {
            ticker: truncate(entry.ticker),
            receiving_address: truncate(entry.receiving_address),
            sending_address: truncate(entry.sending_address),
            content_type: truncate(entry.content_type),
            utxo: truncate(entry.utxo),
            final_txid: truncate_opt(entry.final_txid),
            pending_txs: truncate_opt(entry.pending_txs),
            error: truncate_opt(entry.error),
            ..entry
        };

        if let Err(e) = AuditRepository::new(self.db)
            .insert_mint_log(entry, now())
            .await
        {
            tracing::warn!("Failed to write mint log: {}", e);
        }
    }

    pub async fn record_allocation(&self, entry: AllocationLogEntry) {
        let entry = AllocationLogEntry {
            ticker: truncate(entry.ticker),
            sn: truncate_opt(entry.sn),
            error: truncate_opt(entry.error),
            ..entry
        };

        if let Err(e) = AuditRepository::new(self.db)
            .insert_allocation_log(entry, now())
            .await
        {
            tracing::warn!("Failed to write allocation log: {}", e);
        }
    }

    pub async fn record_error(&self, entry: ErrorLogEntry) {
        let entry = ErrorLogEntry {
            context: truncate(entry.context),
            message: truncate(entry.message),
            details: truncate_opt(entry.details),
            extra: truncate_opt(entry.extra),
        };

        if let Err(e) = AuditRepository::new(self.db)
            .insert_error_log(entry, now())
            .await
        {
            tracing::warn!("Failed to write error log: {}", e);
        }
    }
}
