pub use sea_orm_migration::prelude::*;

mod m20251101_000001_cached_location;
mod m20251101_000002_market_type_set;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_cached_location::Migration),
            Box::new(m20251101_000002_market_type_set::Migration),
        ]
    }
}
