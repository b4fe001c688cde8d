//! Company settings entity model
//!
//! SeaORM entity for the singleton `company_settings` row describing the
//! deploying organization.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Organization profile shown on generated documents
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub company_name: String,

    #[sea_orm(column_type = "Text")]
    pub address: String,

    pub phone: String,

    pub email: String,

    pub website: Option<String>,

    pub tax_number: Option<String>,

    /// Logo payloads are managed by the application, never by this tool
    #[sea_orm(column_type = "Text", nullable)]
    pub light_mode_logo: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub dark_mode_logo: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub quote_logo: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
