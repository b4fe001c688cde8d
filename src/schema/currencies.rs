//! `currencies` table: reference currencies keyed by a unique code.

use sea_orm::sea_query::{ColumnDef, Index, Table, TableCreateStatement};
use sea_orm::{DbBackend, DeriveIden};

use super::{apply_table_options, id_column};

pub(super) fn create_table(backend: DbBackend) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(Currencies::Table)
        .if_not_exists()
        .col(id_column(Currencies::Id))
        .col(
            ColumnDef::new(Currencies::Code)
                .string_len(10)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Currencies::Name).string_len(100).not_null())
        .col(ColumnDef::new(Currencies::Symbol).string_len(10).not_null())
        .col(
            ColumnDef::new(Currencies::IsActive)
                .boolean()
                .default(true)
                .not_null(),
        );

    if backend == DbBackend::MySql {
        stmt.index(Index::create().unique().name("code_idx").col(Currencies::Code));
    }

    apply_table_options(backend, &mut stmt);
    stmt
}

#[derive(DeriveIden)]
enum Currencies {
    Table,
    Id,
    Code,
    Name,
    Symbol,
    IsActive,
}
