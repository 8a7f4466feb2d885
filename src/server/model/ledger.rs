use crate::{
    model::collection::{CollectionSummaryDto, ItemDto, ValidateDto},
    server::{
        error::ledger::LedgerError,
        model::db::{CollectionModel, ItemModel},
    },
};

/// Inclusive numeric bounds parsed from a `start-end` range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerialRangeBounds {
    pub start: u64,
    pub end: u64,
}

impl SerialRangeBounds {
    /// Parses `"start-end"`; both sides must be unsigned integers with `start <= end`.
    pub fn parse(value: &str) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidRangeFormat(value.to_string());

        let (start, end) = value.trim().split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse::<u64>().map_err(|_| invalid())?;
        let end = end.trim().parse::<u64>().map_err(|_| invalid())?;

        if start > end {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }

    /// Number of values in the range, `None` when it exceeds `u64`.
    pub fn size(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }
}

/// Derived supply figures of a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplyStats {
    pub max_supply: u64,
    pub minted: u64,
    /// Negative when more items were inscribed than the ranges allow
    pub left_to_mint: i64,
    /// Rounded to 2 decimals, 0 when `max_supply` is 0
    pub percent_minted: f64,
}

impl SupplyStats {
    pub fn new(max_supply: u64, minted: u64) -> Self {
        let percent_minted = if max_supply == 0 {
            0.0
        } else {
            (minted as f64 / max_supply as f64 * 100.0 * 100.0).round() / 100.0
        };

        Self {
            max_supply,
            minted,
            left_to_mint: max_supply as i64 - minted as i64,
            percent_minted,
        }
    }
}

/// A collection together with its ranges, statistics and items.
#[derive(Clone, Debug)]
pub struct CollectionSummary {
    pub collection: CollectionModel,
    pub ranges: Vec<String>,
    pub stats: SupplyStats,
    /// Ordered by inscription sequence number, items without one last
    pub items: Vec<ItemModel>,
}

/// Where an inscription or serial number was found.
#[derive(Clone, Debug)]
pub struct ItemLocation {
    pub collection: CollectionModel,
    /// 1-based position of the item in its collection, in creation order
    pub number: usize,
    pub item: ItemModel,
}

impl From<ItemModel> for ItemDto {
    fn from(item: ItemModel) -> Self {
        Self {
            sn: item.sn,
            inscription_id: item.inscription_id,
            inscription_status: item.inscription_status,
            inscription_address: item.inscription_address,
            sequence_number: item.sequence_number,
            created_at: item.created_at,
        }
    }
}

impl From<CollectionSummary> for CollectionSummaryDto {
    fn from(summary: CollectionSummary) -> Self {
        let collection = summary.collection;

        Self {
            coin_ticker: collection.coin_ticker,
            name: collection.name,
            sanitized_name: collection.sanitized_name,
            mint_address: collection.mint_address,
            deploy_address: collection.deploy_address,
            mint_price: collection.mint_price,
            parent_inscription_id: collection.parent_inscription_id,
            emblem_inscription_id: collection.emblem_inscription_id,
            website: collection.website,
            deploy_txid: collection.deploy_txid,
            block_height: collection.created_at,
            ranges: summary.ranges,
            max_supply: summary.stats.max_supply,
            minted: summary.stats.minted,
            left_to_mint: summary.stats.left_to_mint,
            percent_minted: summary.stats.percent_minted,
            items: summary.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ItemLocation> for ValidateDto {
    fn from(location: ItemLocation) -> Self {
        Self {
            coin_ticker: location.collection.coin_ticker,
            collection_name: location.collection.sanitized_name,
            number: location.number,
            sn: location.item.sn,
            deploy_address: location.collection.deploy_address,
            deploy_txid: location.collection.deploy_txid,
            parent_inscription_id: location.collection.parent_inscription_id,
            inscription_address: location.item.inscription_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect well formed ranges to parse with their inclusive size
    #[test]
    fn parses_valid_range() {
        let range = SerialRangeBounds::parse("1-999999").unwrap();

        assert_eq!(range, SerialRangeBounds { start: 1, end: 999999 });
        assert_eq!(range.size(), Some(999999));
        assert_eq!(SerialRangeBounds::parse(" 5 - 5 ").unwrap().size(), Some(1));
    }

    /// Expect the full u64 range to report no representable size
    #[test]
    fn full_range_has_no_size() {
        let range = SerialRangeBounds::parse("0-18446744073709551615").unwrap();

        assert_eq!(range.size(), None);
    }

    /// Expect malformed ranges to be rejected as invalid range format
    #[test]
    fn rejects_malformed_ranges() {
        for value in ["", "10", "a-b", "1-", "-5", "10-1", "1-2-3", "-1-5"] {
            assert!(
                matches!(
                    SerialRangeBounds::parse(value),
                    Err(LedgerError::InvalidRangeFormat(_))
                ),
                "expected '{}' to be rejected",
                value
            );
        }
    }

    /// Expect percent minted to round to 2 decimals and to be 0 without supply
    #[test]
    fn computes_supply_stats() {
        let stats = SupplyStats::new(3, 1);
        assert_eq!(stats.percent_minted, 33.33);
        assert_eq!(stats.left_to_mint, 2);

        let empty = SupplyStats::new(0, 0);
        assert_eq!(empty.percent_minted, 0.0);
        assert_eq!(empty.left_to_mint, 0);
    }
}
