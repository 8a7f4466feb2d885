use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_collection::Collection;

// Not unique: an expired reservation may be handed out again as a new row
static IDX_ITEM_COLLECTION_ID_SN: &str = "idx-item-collection_id-sn";
static IDX_ITEM_INSCRIPTION_ID: &str = "idx-item-inscription_id";
static FK_ITEM_COLLECTION_ID: &str = "fk-item-collection_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(integer(Item::CollectionId))
                    .col(string(Item::Sn))
                    .col(string_null(Item::InscriptionId))
                    .col(string_null(Item::InscriptionStatus))
                    .col(string_null(Item::InscriptionAddress))
                    .col(big_integer_null(Item::SequenceNumber))
                    .col(timestamp(Item::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_COLLECTION_ID_SN)
                    .table(Item::Table)
                    .col(Item::CollectionId)
                    .col(Item::Sn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_INSCRIPTION_ID)
                    .table(Item::Table)
                    .col(Item::InscriptionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_COLLECTION_ID)
                    .from_tbl(Item::Table)
                    .from_col(Item::CollectionId)
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
                    .name(FK_ITEM_COLLECTION_ID)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_INSCRIPTION_ID)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_COLLECTION_ID_SN)
                    .table(Item::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Item {
    Table,
    Id,
    CollectionId,
    Sn,
    InscriptionId,
    InscriptionStatus,
    InscriptionAddress,
    SequenceNumber,
    CreatedAt,
}
