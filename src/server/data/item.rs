use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::ItemModel;

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reserve a serial number for a collection.
    pub async fn create(
        &self,
        collection_id: i32,
        sn: String,
        created_at: NaiveDateTime,
    ) -> Result<ItemModel, DbErr> {
        entity::prelude::Item::insert(entity::item::ActiveModel {
            collection_id: ActiveValue::Set(collection_id),
            sn: ActiveValue::Set(sn),
            inscription_id: ActiveValue::Set(None),
            inscription_status: ActiveValue::Set(None),
            inscription_address: ActiveValue::Set(None),
            sequence_number: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Serial numbers that are inscribed or were reserved after `reserved_after`.
    pub async fn get_active_sns(
        &self,
        collection_id: i32,
        reserved_after: NaiveDateTime,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::Item::find()
            .select_only()
            .column(entity::item::Column::Sn)
            .filter(entity::item::Column::CollectionId.eq(collection_id))
            .filter(
                Condition::any()
                    .add(entity::item::Column::InscriptionId.is_not_null())
                    .add(entity::item::Column::CreatedAt.gt(reserved_after)),
            )
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// All items of a collection in creation order.
    pub async fn get_by_collection_id(&self, collection_id: i32) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::CollectionId.eq(collection_id))
            .order_by_asc(entity::item::Column::CreatedAt)
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of inscribed items of a collection.
    pub async fn count_minted(&self, collection_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::CollectionId.eq(collection_id))
            .filter(entity::item::Column::InscriptionId.is_not_null())
            .count(self.db)
            .await
    }

    /// Inscription ids of a collection currently held by `address`, in creation order.
    pub async fn get_inscriptions_by_address(
        &self,
        collection_id: i32,
        address: &str,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::Item::find()
            .select_only()
            .column(entity::item::Column::InscriptionId)
            .filter(entity::item::Column::CollectionId.eq(collection_id))
            .filter(entity::item::Column::InscriptionAddress.eq(address))
            .filter(entity::item::Column::InscriptionId.is_not_null())
            .order_by_asc(entity::item::Column::CreatedAt)
            .order_by_asc(entity::item::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
