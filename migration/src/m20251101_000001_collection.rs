use sea_orm_migration::{prelude::*, schema::*};

static IDX_COLLECTION_TICKER_SANITIZED_NAME: &str = "idx-collection-coin_ticker-sanitized_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_auto(Collection::Id))
                    .col(string(Collection::CoinTicker))
                    .col(string(Collection::Name))
                    .col(string(Collection::SanitizedName))
                    .col(string_null(Collection::MintAddress))
                    .col(string_null(Collection::DeployAddress))
                    .col(big_integer_null(Collection::MintPrice))
                    .col(string_null(Collection::ParentInscriptionId))
                    .col(string_null(Collection::EmblemInscriptionId))
                    .col(string_null(Collection::Website))
                    .col(string_null(Collection::DeployTxid))
                    .col(big_integer(Collection::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTION_TICKER_SANITIZED_NAME)
                    .table(Collection::Table)
                    .col(Collection::CoinTicker)
                    .col(Collection::SanitizedName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLECTION_TICKER_SANITIZED_NAME)
                    .table(Collection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    Table,
    Id,
    CoinTicker,
    Name,
    SanitizedName,
    MintAddress,
    DeployAddress,
    MintPrice,
    ParentInscriptionId,
    EmblemInscriptionId,
    Website,
    DeployTxid,
    CreatedAt,
}
