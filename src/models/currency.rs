//! Currency entity model
//!
//! SeaORM entity for the `currencies` reference table.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// A currency the application can price documents in
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "currencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// ISO-like code, unique across the table
    #[sea_orm(unique)]
    pub code: String,

    pub name: String,

    pub symbol: String,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
