use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketTypeSet::Table)
                    .if_not_exists()
                    .col(string(MarketTypeSet::Key).primary_key())
                    .col(text(MarketTypeSet::TypeIds))
                    .col(timestamp(MarketTypeSet::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarketTypeSet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MarketTypeSet {
    Table,
    Key,
    TypeIds,
    UpdatedAt,
}
