use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mint_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
