//! `users` table: accounts with unique username and email.
//!
//! Declared for the application; this tool never inserts rows into it.

use sea_orm::sea_query::{ColumnDef, Expr, Index, Table, TableCreateStatement};
use sea_orm::{DbBackend, DeriveIden};

use super::{apply_table_options, id_column, updated_at_column};

pub(super) fn create_table(backend: DbBackend) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(Users::Table)
        .if_not_exists()
        .col(id_column(Users::Id))
        .col(
            ColumnDef::new(Users::Username)
                .string_len(50)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(Users::Email)
                .string_len(255)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Users::Password).string_len(255).not_null())
        .col(ColumnDef::new(Users::Name).string_len(255).not_null())
        .col(ColumnDef::new(Users::CompanyName).string_len(255).not_null())
        .col(
            ColumnDef::new(Users::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .not_null(),
        )
        .col(updated_at_column(backend, Users::UpdatedAt));

    if backend == DbBackend::MySql {
        stmt.index(Index::create().unique().name("username_idx").col(Users::Username))
            .index(Index::create().unique().name("email_idx").col(Users::Email));
    }

    apply_table_options(backend, &mut stmt);
    stmt
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
    Name,
    CompanyName,
    CreatedAt,
    UpdatedAt,
}
