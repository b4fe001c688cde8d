//! `company_settings` table: the singleton organization profile.

use sea_orm::sea_query::{Alias, ColumnDef, Expr, Table, TableCreateStatement};
use sea_orm::{DbBackend, DeriveIden};

use super::{apply_table_options, id_column, updated_at_column};

pub(super) fn create_table(backend: DbBackend) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(CompanySettings::Table)
        .if_not_exists()
        .col(id_column(CompanySettings::Id))
        .col(
            ColumnDef::new(CompanySettings::CompanyName)
                .string_len(255)
                .not_null(),
        )
        .col(ColumnDef::new(CompanySettings::Address).text().not_null())
        .col(ColumnDef::new(CompanySettings::Phone).string_len(50).not_null())
        .col(ColumnDef::new(CompanySettings::Email).string_len(255).not_null())
        .col(ColumnDef::new(CompanySettings::Website).string_len(255).null())
        .col(ColumnDef::new(CompanySettings::TaxNumber).string_len(50).null())
        .col(logo_column(CompanySettings::LightModeLogo))
        .col(logo_column(CompanySettings::DarkModeLogo))
        .col(logo_column(CompanySettings::QuoteLogo))
        .col(
            ColumnDef::new(CompanySettings::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .not_null(),
        )
        .col(updated_at_column(backend, CompanySettings::UpdatedAt));

    apply_table_options(backend, &mut stmt);
    stmt
}

fn logo_column(column: CompanySettings) -> ColumnDef {
    ColumnDef::new(column)
        .custom(Alias::new("longtext"))
        .null()
        .to_owned()
}

#[derive(DeriveIden)]
enum CompanySettings {
    Table,
    Id,
    CompanyName,
    Address,
    Phone,
    Email,
    Website,
    TaxNumber,
    LightModeLogo,
    DarkModeLogo,
    QuoteLogo,
    CreatedAt,
    UpdatedAt,
}
