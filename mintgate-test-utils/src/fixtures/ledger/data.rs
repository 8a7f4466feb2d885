//! Ledger database insertion utilities.

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    error::TestError,
    fixtures::ledger::{factory, LedgerFixtures},
};

type CollectionModel = entity::collection::Model;
type ItemModel = entity::item::Model;

impl<'a> LedgerFixtures<'a> {
    /// Insert a collection with its serial ranges.
    ///
    /// Collections are deployed at increasing block heights in insertion order, starting at
    /// 100.
    ///
    /// # Arguments
    /// - `name` - Collection name, its sanitized form is derived from it
    /// - `ranges` - `start-end` range values in concatenation order
    ///
    /// # Returns
    /// - `Ok(CollectionModel)` - The created collection
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_collection(
        &self,
        name: &str,
        ranges: &[&str],
    ) -> Result<CollectionModel, TestError> {
        let existing = entity::prelude::Collection::find()
            .count(&self.setup.db)
            .await?;

        self.insert_mock_collection_at(name, ranges, 100 + existing as i64)
            .await
    }

    /// Insert a collection deployed at `block_height` with its serial ranges.
    pub async fn insert_mock_collection_at(
        &self,
        name: &str,
        ranges: &[&str],
        block_height: i64,
    ) -> Result<CollectionModel, TestError> {
        let collection =
            entity::prelude::Collection::insert(factory::mock_collection(name, block_height))
                .exec_with_returning(&self.setup.db)
                .await?;

        for (index, range) in ranges.iter().enumerate() {
            entity::prelude::SerialRange::insert(factory::mock_serial_range(
                collection.id,
                index as i32,
                range,
            ))
            .exec_with_returning(&self.setup.db)
            .await?;
        }

        Ok(collection)
    }

    /// Insert a reservation made `age` ago.
    pub async fn insert_reserved_item(
        &self,
        collection_id: i32,
        sn: &str,
        age: Duration,
    ) -> Result<ItemModel, TestError> {
        let created_at: NaiveDateTime = Utc::now().naive_utc() - age;

        Ok(
            entity::prelude::Item::insert(factory::mock_reserved_item(
                collection_id,
                sn,
                created_at,
            ))
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an inscribed item held by `address`.
    pub async fn insert_inscribed_item(
        &self,
        collection_id: i32,
        sn: &str,
        inscription_id: &str,
        address: &str,
        sequence_number: i64,
    ) -> Result<ItemModel, TestError> {
        Ok(
            entity::prelude::Item::insert(factory::mock_inscribed_item(
                collection_id,
                sn,
                inscription_id,
                address,
                sequence_number,
            ))
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
