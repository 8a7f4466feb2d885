use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TxLog::Table)
                    .if_not_exists()
                    .col(pk_auto(TxLog::Id))
                    .col(string(TxLog::Ticker))
                    .col(string(TxLog::Action))
                    .col(string(TxLog::Status))
                    .col(string_null(TxLog::Txid))
                    .col(text_null(TxLog::RawTx))
                    .col(text_null(TxLog::Metadata))
                    .col(text_null(TxLog::Error))
                    .col(timestamp(TxLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MintLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MintLog::Id))
                    .col(string(MintLog::Ticker))
                    .col(string(MintLog::ReceivingAddress))
                    .col(string(MintLog::SendingAddress))
                    .col(string(MintLog::ContentType))
                    .col(big_integer(MintLog::ContentBytes))
                    .col(string(MintLog::Utxo))
                    .col(integer(MintLog::Vout))
                    .col(big_integer(MintLog::UtxoAmountSats))
                    .col(string_null(MintLog::FinalTxid))
                    .col(text_null(MintLog::PendingTxs))
                    .col(boolean(MintLog::Ok))
                    .col(text_null(MintLog::Error))
                    .col(timestamp(MintLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AllocationLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AllocationLog::Id))
                    .col(string(AllocationLog::Ticker))
                    .col(integer(AllocationLog::CollectionId))
                    .col(string_null(AllocationLog::Sn))
                    .col(boolean(AllocationLog::Ok))
                    .col(text_null(AllocationLog::Error))
                    .col(timestamp(AllocationLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ErrorLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ErrorLog::Id))
                    .col(string(ErrorLog::Context))
                    .col(text(ErrorLog::Message))
                    .col(text_null(ErrorLog::Details))
                    .col(text_null(ErrorLog::Extra))
                    .col(timestamp(ErrorLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ErrorLog::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AllocationLog::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MintLog::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TxLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TxLog {
    Table,
    Id,
    Ticker,
    Action,
    Status,
    Txid,
    RawTx,
    Metadata,
    Error,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MintLog {
    Table,
    Id,
    Ticker,
    ReceivingAddress,
    SendingAddress,
    ContentType,
    ContentBytes,
    Utxo,
    Vout,
    UtxoAmountSats,
    FinalTxid,
    PendingTxs,
    Ok,
    Error,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AllocationLog {
    Table,
    Id,
    Ticker,
    CollectionId,
    Sn,
    Ok,
    Error,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ErrorLog {
    Table,
    Id,
    Context,
    Message,
    Details,
    Extra,
    CreatedAt,
}
