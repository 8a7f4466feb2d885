use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Transaction event (broadcast, transfer construction) to record in `tx_log`.
#[derive(Clone, Debug, Default)]
pub struct TxLogEntry {
    pub ticker: String,
    pub action: String,
    pub status: String,
    pub txid: Option<String>,
    pub raw_tx: Option<String>,
    pub metadata: Option<String>,
    pub error: Option<String>,
}

/// Mint attempt to record in `mint_log`.
#[derive(Clone, Debug, Default)]
pub struct MintLogEntry {
    pub ticker: String,
    pub receiving_address: String,
    pub sending_address: String,
    pub content_type: String,
    pub content_bytes: i64,
    pub utxo: String,
    pub vout: i32,
    pub utxo_amount_sats: i64,
    pub final_txid: Option<String>,
    pub pending_txs: Option<String>,
    pub ok: bool,
    pub error: Option<String>,
}

/// Serial allocation attempt to record in `allocation_log`.
#[derive(Clone, Debug, Default)]
pub struct AllocationLogEntry {
    pub ticker: String,
    pub collection_id: i32,
    pub sn: Option<String>,
    pub ok: bool,
    pub error: Option<String>,
}

/// Unexpected failure to record in `error_log`.
#[derive(Clone, Debug, Default)]
pub struct ErrorLogEntry {
    pub context: String,
    pub message: String,
    pub details: Option<String>,
    pub extra: Option<String>,
}

/// Inserts audit rows. Text is stored as given, truncation is the caller's concern.
pub struct AuditRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn insert_tx_log(
        &self,
        entry: TxLogEntry,
        created_at: NaiveDateTime,
    ) -> Result<entity::tx_log::Model, DbErr> {
        entity::prelude::TxLog::insert(entity::tx_log::ActiveModel {
            ticker: ActiveValue::Set(entry.ticker),
            action: ActiveValue::Set(entry.action),
            status: ActiveValue::Set(entry.status),
            txid: ActiveValue::Set(entry.txid),
            raw_tx: ActiveValue::Set(entry.raw_tx),
            metadata: ActiveValue::Set(entry.metadata),
            error: ActiveValue::Set(entry.error),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn insert_mint_log(
        &self,
        entry: MintLogEntry,
        created_at: NaiveDateTime,
    ) -> Result<entity::mint_log::Model, DbErr> {
        entity::prelude::MintLog::insert(entity::mint_log::ActiveModel {
            ticker: ActiveValue::Set(entry.ticker),
            receiving_address: ActiveValue::Set(entry.receiving_address),
            sending_address: ActiveValue::Set(entry.sending_address),
            content_type: ActiveValue::Set(entry.content_type),
            content_bytes: ActiveValue::Set(entry.content_bytes),
            utxo: ActiveValue::Set(entry.utxo),
            vout: ActiveValue::Set(entry.vout),
            utxo_amount_sats: ActiveValue::Set(entry.utxo_amount_sats),
            final_txid: ActiveValue::Set(entry.final_txid),
            pending_txs: ActiveValue::Set(entry.pending_txs),
            ok: ActiveValue::Set(entry.ok),
            error: ActiveValue::Set(entry.error),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn insert_allocation_log(
        &self,
        entry: AllocationLogEntry,
        created_at: NaiveDateTime,
    ) -> Result<entity::allocation_log::Model, DbErr> {
        entity::prelude::AllocationLog::insert(entity::allocation_log::ActiveModel {
            ticker: ActiveValue::Set(entry.ticker),
            collection_id: ActiveValue::Set(entry.collection_id),
            sn: ActiveValue::Set(entry.sn),
            ok: ActiveValue::Set(entry.ok),
            error: ActiveValue::Set(entry.error),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn insert_error_log(
        &self,
        entry: ErrorLogEntry,
        created_at: NaiveDateTime,
    ) -> Result<entity::error_log::Model, DbErr> {
        entity::prelude::ErrorLog::insert(entity::error_log::ActiveModel {
            context: ActiveValue::Set(entry.context),
            message: ActiveValue::Set(entry.message),
            details: ActiveValue::Set(entry.details),
            extra: ActiveValue::Set(entry.extra),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }
}
