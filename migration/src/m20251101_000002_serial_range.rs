use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_collection::Collection;

static IDX_SERIAL_RANGE_COLLECTION_ID_RANGE_INDEX: &str =
    "idx-serial_range-collection_id-range_index";
static FK_SERIAL_RANGE_COLLECTION_ID: &str = "fk-serial_range-collection_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SerialRange::Table)
                    .if_not_exists()
                    .col(pk_auto(SerialRange::Id))
                    .col(integer(SerialRange::CollectionId))
                    .col(integer(SerialRange::RangeIndex))
                    .col(string(SerialRange::RangeValue))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SERIAL_RANGE_COLLECTION_ID_RANGE_INDEX)
                    .table(SerialRange::Table)
                    .col(SerialRange::CollectionId)
                    .col(SerialRange::RangeIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SERIAL_RANGE_COLLECTION_ID)
                    .from_tbl(SerialRange::Table)
                    .from_col(SerialRange::CollectionId)
                    .to_tbl(Collection::Table)
                    .to_col(Collection::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SERIAL_RANGE_COLLECTION_ID)
                    .table(SerialRange::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SERIAL_RANGE_COLLECTION_ID_RANGE_INDEX)
                    .table(SerialRange::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SerialRange::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SerialRange {
    Table,
    Id,
    CollectionId,
    RangeIndex,
    RangeValue,
}
