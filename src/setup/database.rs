//! Relational database setup.

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;

use crate::config::SetupConfig;
use crate::db;
use crate::schema;
use crate::seeds::{SeedReport, SqlSeedTarget, default_datasets, seed_defaults};

/// Creates the schema and seeds the default rows.
///
/// Missing credentials are reported before any connection is attempted. Once
/// connected, the connection is released whatever the outcome.
pub async fn run(config: &SetupConfig) -> Result<SeedReport> {
    let url = config
        .database
        .connection_url()
        .context("resolving database connection settings")?;

    tracing::info!(profile = %config.profile, "Starting database setup");

    let conn = db::connect(&url)
        .await
        .context("connecting to database")?;

    let outcome = provision(&conn).await;
    db::release(conn).await;

    let report = outcome?;
    tracing::info!(
        inserted = report.inserted(),
        skipped = report.entries.len() - report.inserted(),
        "Database setup completed"
    );
    Ok(report)
}

async fn provision(conn: &DatabaseConnection) -> Result<SeedReport> {
    db::health_check(conn).await?;
    tracing::info!("Database connection verified");

    schema::ensure_schema(conn)
        .await
        .context("creating base tables")?;

    let target = SqlSeedTarget::new(conn);
    seed_defaults(&target, &default_datasets()).await
}
