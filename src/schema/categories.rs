//! `categories` table: income/expense categories owned by a user.

use sea_orm::sea_query::{
    Alias, ColumnDef, Expr, Index, IndexCreateStatement, Table, TableCreateStatement,
};
use sea_orm::{DbBackend, DeriveIden};

use super::{apply_table_options, id_column};

const USER_ID_INDEX: &str = "user_id_idx";

const CATEGORY_TYPES: [&str; 2] = ["income", "expense"];

pub(super) fn create_table(backend: DbBackend) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(Categories::Table)
        .if_not_exists()
        .col(id_column(Categories::Id))
        .col(ColumnDef::new(Categories::Name).string_len(255).not_null())
        .col(type_column(backend))
        .col(ColumnDef::new(Categories::Color).string_len(7).not_null())
        .col(
            ColumnDef::new(Categories::IsDefault)
                .boolean()
                .default(false)
                .not_null(),
        )
        .col(ColumnDef::new(Categories::UserId).string_len(191).not_null())
        .col(
            ColumnDef::new(Categories::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .not_null(),
        );

    // MySQL has no CREATE INDEX IF NOT EXISTS, so the key lives in the table DDL.
    if backend == DbBackend::MySql {
        stmt.index(Index::create().name(USER_ID_INDEX).col(Categories::UserId));
    }

    apply_table_options(backend, &mut stmt);
    stmt
}

fn type_column(backend: DbBackend) -> ColumnDef {
    let mut def = ColumnDef::new(Categories::Type);
    if backend == DbBackend::MySql {
        def.enumeration(
            Alias::new("category_type"),
            CATEGORY_TYPES.iter().map(|t| Alias::new(*t)),
        );
    } else {
        def.string_len(16)
            .check(Expr::col(Categories::Type).is_in(CATEGORY_TYPES));
    }
    def.not_null();
    def
}

/// Standalone index statements for backends that cannot declare plain keys inline.
pub(super) fn create_indexes(backend: DbBackend) -> Vec<IndexCreateStatement> {
    if backend == DbBackend::MySql {
        return Vec::new();
    }

    vec![
        Index::create()
            .if_not_exists()
            .name(USER_ID_INDEX)
            .table(Categories::Table)
            .col(Categories::UserId)
            .to_owned(),
    ]
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Type,
    Color,
    IsDefault,
    UserId,
    CreatedAt,
}
