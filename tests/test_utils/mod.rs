//! Test utilities for database and configuration testing.
//!
//! Database setup runs close their connection at the end, so tests that need
//! to inspect the result use file-backed SQLite databases in a temp dir.

#![allow(dead_code)]

use anyhow::Result;
use calaf_setup::config::{DatabaseSettings, KvSettings, SetupConfig};
use calaf_setup::models::{company_settings, currency};
use calaf_setup::schema;
use sea_orm::{Database, DatabaseConnection, EntityTrait, QueryOrder};
use tempfile::TempDir;

/// URL of a SQLite database file inside `dir`, created on first connect.
pub fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("setup.db").display())
}

/// A configuration pointing the database path at `url` and the KV path nowhere.
pub fn config_with_database_url(url: &str) -> SetupConfig {
    SetupConfig {
        database: DatabaseSettings {
            url: Some(url.to_string()),
            ..DatabaseSettings::default()
        },
        ..SetupConfig::default()
    }
}

/// A configuration with KV credentials pointing at `url`.
pub fn config_with_kv(url: &str, token: &str) -> SetupConfig {
    SetupConfig {
        kv: KvSettings {
            rest_api_url: Some(url.to_string()),
            rest_api_token: Some(token.to_string()),
        },
        ..SetupConfig::default()
    }
}

/// Sets up an in-memory SQLite database with the schema applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    schema::ensure_schema(&db).await?;
    Ok(db)
}

pub async fn open(url: &str) -> Result<DatabaseConnection> {
    Ok(Database::connect(url).await?)
}

pub async fn all_currencies(db: &DatabaseConnection) -> Result<Vec<currency::Model>> {
    Ok(currency::Entity::find()
        .order_by_asc(currency::Column::Id)
        .all(db)
        .await?)
}

pub async fn all_company_settings(
    db: &DatabaseConnection,
) -> Result<Vec<company_settings::Model>> {
    Ok(company_settings::Entity::find().all(db).await?)
}
