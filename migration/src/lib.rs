pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_marketplace_tables;
mod m20250315_000001_create_notifications_table;
mod m20250402_000001_normalize_item_status_values;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_marketplace_tables::Migration),
            Box::new(m20250315_000001_create_notifications_table::Migration),
            Box::new(m20250402_000001_normalize_item_status_values::Migration),
        ]
    }
}
