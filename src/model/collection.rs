use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An item (allocated serial number) of a collection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct ItemDto {
    pub sn: String,
    pub inscription_id: Option<String>,
    pub inscription_status: Option<String>,
    pub inscription_address: Option<String>,
    pub sequence_number: Option<i64>,
    pub created_at: NaiveDateTime,
}

/// Collection listing entry with derived supply statistics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct CollectionSummaryDto {
    pub coin_ticker: String,
    pub name: String,
    pub sanitized_name: String,
    pub mint_address: Option<String>,
    pub deploy_address: Option<String>,
    pub mint_price: Option<i64>,
    pub parent_inscription_id: Option<String>,
    pub emblem_inscription_id: Option<String>,
    pub website: Option<String>,
    pub deploy_txid: Option<String>,
    /// Block height at which the collection was deployed
    pub block_height: i64,
    /// Serial ranges as `start-end`, in concatenation order
    pub ranges: Vec<String>,
    pub max_supply: u64,
    pub minted: u64,
    pub left_to_mint: i64,
    pub percent_minted: f64,
    /// Items ordered by inscription sequence number
    pub items: Vec<ItemDto>,
}

/// Raw item listing of one collection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct CollectionItemsDto {
    pub coin_ticker: String,
    pub name: String,
    pub items: Vec<ItemDto>,
}

/// Inscriptions of a collection held by an address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct InscriptionsDto {
    pub address: String,
    pub inscriptions: Vec<String>,
}

/// Result of validating an inscription id or serial number against the ledger
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct ValidateDto {
    pub coin_ticker: String,
    /// Sanitized name of the collection
    pub collection_name: String,
    /// 1-based position of the item within its collection, in creation order
    pub number: usize,
    pub sn: String,
    pub deploy_address: Option<String>,
    pub deploy_txid: Option<String>,
    pub parent_inscription_id: Option<String>,
    pub inscription_address: Option<String>,
}

/// Hex encoded rc001 mint document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct MintHexDto {
    pub status: String,
    pub hex: String,
}
