//! Collection ledger: lookups over collections, serial ranges and items, plus the supply
//! statistics derived from them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        collection::CollectionRepository, item::ItemRepository,
        serial_range::SerialRangeRepository,
    },
    error::{ledger::LedgerError, Error},
    model::{
        db::{CollectionModel, ItemModel},
        ledger::{CollectionSummary, ItemLocation, SerialRangeBounds, SupplyStats},
    },
    service::retry::RetryContext,
};

/// Product of the range sizes; 0 for a collection without ranges.
pub fn max_supply(collection_id: i32, ranges: &[SerialRangeBounds]) -> Result<u64, LedgerError> {
    if ranges.is_empty() {
        return Ok(0);
    }

    ranges.iter().try_fold(1u64, |supply, range| {
        range
            .size()
            .and_then(|size| supply.checked_mul(size))
            .ok_or(LedgerError::SupplyOverflow(collection_id))
    })
}

/// Orders items by inscription sequence number, items without one last in creation order.
pub fn order_by_sequence(mut items: Vec<ItemModel>) -> Vec<ItemModel> {
    items.sort_by_key(|item| (item.sequence_number.is_none(), item.sequence_number));
    items
}

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parsed serial ranges of a collection in concatenation order.
    pub async fn ranges(&self, collection_id: i32) -> Result<Vec<SerialRangeBounds>, Error> {
        let ranges = SerialRangeRepository::new(self.db)
            .get_by_collection_id(collection_id)
            .await?;

        ranges
            .iter()
            .map(|range| SerialRangeBounds::parse(&range.range_value).map_err(Error::from))
            .collect()
    }

    /// Find a collection of `ticker` by (sanitized, case-insensitive) name.
    pub async fn find_collection(&self, ticker: &str, name: &str) -> Result<CollectionModel, Error> {
        CollectionRepository::new(self.db)
            .find_by_ticker_and_name(ticker, name)
            .await?
            .ok_or_else(|| {
                LedgerError::CollectionNotFound {
                    ticker: ticker.to_string(),
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Supply statistics of a collection.
    pub async fn supply_stats(&self, collection_id: i32) -> Result<SupplyStats, Error> {
        let ranges = self.ranges(collection_id).await?;
        let max_supply = max_supply(collection_id, &ranges)?;
        let minted = ItemRepository::new(self.db)
            .count_minted(collection_id)
            .await?;

        Ok(SupplyStats::new(max_supply, minted))
    }

    /// All collections of `ticker`, newest deployment first, with statistics and items.
    pub async fn list_collections(&self, ticker: &str) -> Result<Vec<CollectionSummary>, Error> {
        let retry = RetryContext::new();
        let db = self.db;

        retry
            .execute_with_retry("collection listing", move || async move {
                LedgerService::new(db).load_summaries(ticker).await
            })
            .await
    }

    async fn load_summaries(&self, ticker: &str) -> Result<Vec<CollectionSummary>, Error> {
        let mut collections = CollectionRepository::new(self.db)
            .get_by_ticker(ticker)
            .await?;
        collections.reverse();

        let item_repo = ItemRepository::new(self.db);
        let range_repo = SerialRangeRepository::new(self.db);

        let mut summaries = Vec::with_capacity(collections.len());
        for collection in collections {
            let range_values: Vec<String> = range_repo
                .get_by_collection_id(collection.id)
                .await?
                .into_iter()
                .map(|range| range.range_value)
                .collect();

            let bounds = range_values
                .iter()
                .map(|value| SerialRangeBounds::parse(value))
                .collect::<Result<Vec<_>, _>>()?;

            let items = item_repo.get_by_collection_id(collection.id).await?;
            let minted = items.iter().filter(|i| i.inscription_id.is_some()).count() as u64;
            let stats = SupplyStats::new(max_supply(collection.id, &bounds)?, minted);

            summaries.push(CollectionSummary {
                collection,
                ranges: range_values,
                stats,
                items: order_by_sequence(items),
            });
        }

        Ok(summaries)
    }

    /// Items of a collection in creation order.
    pub async fn list_items(&self, collection_id: i32) -> Result<Vec<ItemModel>, Error> {
        Ok(ItemRepository::new(self.db)
            .get_by_collection_id(collection_id)
            .await?)
    }

    /// Inscription ids of a collection held by `address`.
    pub async fn inscriptions_by_address(
        &self,
        collection_id: i32,
        address: &str,
    ) -> Result<Vec<String>, Error> {
        Ok(ItemRepository::new(self.db)
            .get_inscriptions_by_address(collection_id, address)
            .await?)
    }

    /// Locate an inscription id or serial number among the collections of `ticker`.
    ///
    /// Collections are scanned in deploy order and their items in creation order; the first
    /// item whose inscription id or serial number equals `id` wins.
    pub async fn find_by_serial_or_inscription(
        &self,
        ticker: &str,
        id: &str,
    ) -> Result<ItemLocation, Error> {
        let retry = RetryContext::new();
        let db = self.db;

        retry
            .execute_with_retry("inscription lookup", move || async move {
                LedgerService::new(db).scan_for_item(ticker, id).await
            })
            .await
    }

    async fn scan_for_item(&self, ticker: &str, id: &str) -> Result<ItemLocation, Error> {
        let collections = CollectionRepository::new(self.db)
            .get_by_ticker(ticker)
            .await?;
        let item_repo = ItemRepository::new(self.db);

        for collection in collections {
            let items = item_repo.get_by_collection_id(collection.id).await?;

            let found = items.into_iter().enumerate().find(|(_, item)| {
                item.inscription_id.as_deref() == Some(id) || item.sn == id
            });

            if let Some((position, item)) = found {
                return Ok(ItemLocation {
                    collection,
                    number: position + 1,
                    item,
                });
            }
        }

        Err(LedgerError::ItemNotFound(id.to_string()).into())
    }
}
