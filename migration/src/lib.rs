pub use sea_orm_migration::prelude::*;

mod m20251101_000001_collection;
mod m20251101_000002_serial_range;
mod m20251101_000003_item;
mod m20251101_000004_audit_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_collection::Migration),
            Box::new(m20251101_000002_serial_range::Migration),
            Box::new(m20251101_000003_item::Migration),
            Box::new(m20251101_000004_audit_log::Migration),
        ]
    }
}
