//! Builders for ledger rows with standard test values.

use chrono::{NaiveDateTime, Utc};
use sea_orm::ActiveValue;

use crate::constant::TEST_TICKER;

/// Collection named `name` deployed at `block_height` under the test ticker.
///
/// The sanitized name strips everything but letters, digits, `_` and `-`.
pub fn mock_collection(name: &str, block_height: i64) -> entity::collection::ActiveModel {
    let sanitized_name: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    entity::collection::ActiveModel {
        coin_ticker: ActiveValue::Set(TEST_TICKER.to_string()),
        name: ActiveValue::Set(name.to_string()),
        sanitized_name: ActiveValue::Set(sanitized_name.clone()),
        mint_address: ActiveValue::Set(Some(format!("{}-mint-address", sanitized_name))),
        deploy_address: ActiveValue::Set(Some(format!("{}-deploy-address", sanitized_name))),
        mint_price: ActiveValue::Set(Some(100_000)),
        parent_inscription_id: ActiveValue::Set(Some(format!("{}parenti0", sanitized_name))),
        emblem_inscription_id: ActiveValue::Set(None),
        website: ActiveValue::Set(None),
        deploy_txid: ActiveValue::Set(Some(format!("{}deploytxid", sanitized_name))),
        created_at: ActiveValue::Set(block_height),
        ..Default::default()
    }
}

/// Serial range `range_value` at position `range_index` of a collection.
pub fn mock_serial_range(
    collection_id: i32,
    range_index: i32,
    range_value: &str,
) -> entity::serial_range::ActiveModel {
    entity::serial_range::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        range_index: ActiveValue::Set(range_index),
        range_value: ActiveValue::Set(range_value.to_string()),
        ..Default::default()
    }
}

/// Reserved, not yet inscribed item created at `created_at`.
pub fn mock_reserved_item(
    collection_id: i32,
    sn: &str,
    created_at: NaiveDateTime,
) -> entity::item::ActiveModel {
    entity::item::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        sn: ActiveValue::Set(sn.to_string()),
        inscription_id: ActiveValue::Set(None),
        inscription_status: ActiveValue::Set(None),
        inscription_address: ActiveValue::Set(None),
        sequence_number: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
}

/// Inscribed item held by `address`.
pub fn mock_inscribed_item(
    collection_id: i32,
    sn: &str,
    inscription_id: &str,
    address: &str,
    sequence_number: i64,
) -> entity::item::ActiveModel {
    entity::item::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        sn: ActiveValue::Set(sn.to_string()),
        inscription_id: ActiveValue::Set(Some(inscription_id.to_string())),
        inscription_status: ActiveValue::Set(Some("confirmed".to_string())),
        inscription_address: ActiveValue::Set(Some(address.to_string())),
        sequence_number: ActiveValue::Set(Some(sequence_number)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
