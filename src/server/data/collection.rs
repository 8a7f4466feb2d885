use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{model::db::CollectionModel, util::sanitize::matches_sanitized};

pub struct CollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Collections of `ticker` (case-insensitive) in deploy order, oldest first.
    ///
    /// Ties on the deploy block height are broken by insertion order.
    pub async fn get_by_ticker(&self, ticker: &str) -> Result<Vec<CollectionModel>, DbErr> {
        entity::prelude::Collection::find()
            .filter(
                Expr::expr(Func::upper(Expr::col(entity::collection::Column::CoinTicker)))
                    .eq(ticker.to_uppercase()),
            )
            .order_by_asc(entity::collection::Column::CreatedAt)
            .order_by_asc(entity::collection::Column::Id)
            .all(self.db)
            .await
    }

    /// Find a collection of `ticker` by name, ignoring case and characters a sanitized
    /// name can't contain.
    ///
    /// The name is compared with a Unicode case fold after loading the ticker's collections,
    /// since SQLite's `UPPER` only folds ASCII.
    pub async fn find_by_ticker_and_name(
        &self,
        ticker: &str,
        name: &str,
    ) -> Result<Option<CollectionModel>, DbErr> {
        Ok(self
            .get_by_ticker(ticker)
            .await?
            .into_iter()
            .find(|c| matches_sanitized(&c.sanitized_name, name)))
    }
}
