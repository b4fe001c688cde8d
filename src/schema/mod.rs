//! Relational schema setup.
//!
//! Every statement is a "create if not exists", so [`ensure_schema`] can be
//! run against a populated database without effect. MySQL receives the full
//! production DDL (named keys, `ON UPDATE`, InnoDB/utf8mb4); SQLite receives
//! the portable subset used for local runs and tests.

use anyhow::{Context, Result, bail};
use sea_orm::sea_query::{ColumnDef, Expr, IntoIden, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbBackend, Statement};

mod categories;
mod company_settings;
mod currencies;
mod users;

/// Tables created by [`ensure_schema`], in creation order.
pub const TABLES: [&str; 4] = ["users", "currencies", "categories", "company_settings"];

/// Renders the schema statements for `backend`, in execution order.
pub fn statements(backend: DbBackend) -> Vec<Statement> {
    let mut statements: Vec<Statement> = [
        users::create_table(backend),
        currencies::create_table(backend),
        categories::create_table(backend),
        company_settings::create_table(backend),
    ]
    .iter()
    .map(|table| backend.build(table))
    .collect();

    statements.extend(
        categories::create_indexes(backend)
            .iter()
            .map(|index| backend.build(index)),
    );

    statements
}

/// Creates any missing table of the schema.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<()> {
    let backend = db.get_database_backend();
    if !matches!(backend, DbBackend::MySql | DbBackend::Sqlite) {
        bail!("unsupported database backend {:?}", backend);
    }

    for stmt in statements(backend) {
        log::debug!("Executing schema statement: {}", stmt);
        db.execute(stmt.clone())
            .await
            .with_context(|| format!("executing schema statement `{}`", stmt))?;
    }

    log::info!("Schema ready ({})", TABLES.join(", "));
    Ok(())
}

fn id_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .string_len(191)
        .not_null()
        .primary_key()
        .to_owned()
}

fn updated_at_column<T: IntoIden>(backend: DbBackend, column: T) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    def.timestamp().default(Expr::current_timestamp()).not_null();
    if backend == DbBackend::MySql {
        def.extra("ON UPDATE CURRENT_TIMESTAMP");
    }
    def
}

fn apply_table_options(backend: DbBackend, stmt: &mut TableCreateStatement) {
    if backend == DbBackend::MySql {
        stmt.engine("InnoDB").character_set("utf8mb4");
    }
}
