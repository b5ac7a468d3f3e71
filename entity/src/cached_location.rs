use sea_orm::entity::prelude::*;

/// One resolved location keyed by its EVE Online identifier.
///
/// `location` holds the JSON-serialised composite location; rows are only ever replaced
/// whole, never patched.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cached_location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub expires_at: i64,
    #[sea_orm(column_type = "Text")]
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
