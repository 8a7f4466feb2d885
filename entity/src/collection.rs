use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub coin_ticker: String,
    pub name: String,
    pub sanitized_name: String,
    pub mint_address: Option<String>,
    pub deploy_address: Option<String>,
    pub mint_price: Option<i64>,
    pub parent_inscription_id: Option<String>,
    pub emblem_inscription_id: Option<String>,
    pub website: Option<String>,
    pub deploy_txid: Option<String>,
    /// Block height at which the collection was deployed
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item::Entity")]
    Item,
    #[sea_orm(has_many = "super::serial_range::Entity")]
    SerialRange,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::serial_range::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SerialRange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
