use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CachedLocation::Table)
                    .if_not_exists()
                    .col(big_integer(CachedLocation::Id).primary_key())
                    .col(big_integer(CachedLocation::ExpiresAt))
                    .col(text(CachedLocation::Location))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CachedLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CachedLocation {
    Table,
    Id,
    ExpiresAt,
    Location,
}
