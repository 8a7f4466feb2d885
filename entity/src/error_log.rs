use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "error_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub context: String,
    pub message: String,
    pub details: Option<String>,
    pub extra: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
