use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::SerialRangeModel;

pub struct SerialRangeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SerialRangeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ranges of a collection in concatenation order.
    pub async fn get_by_collection_id(
        &self,
        collection_id: i32,
    ) -> Result<Vec<SerialRangeModel>, DbErr> {
        entity::prelude::SerialRange::find()
            .filter(entity::serial_range::Column::CollectionId.eq(collection_id))
            .order_by_asc(entity::serial_range::Column::RangeIndex)
            .all(self.db)
            .await
    }
}
