//! Database connection handling for the relational setup path.
//!
//! A run owns exactly one SeaORM connection. It is opened by [`connect`] and
//! must be handed back to [`release`] on every exit path.

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {source}")]
    ConnectionFailed {
        #[from]
        source: sea_orm::DbErr,
    },
    #[error("Invalid database configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Opens a single-connection handle to the database at `url`.
///
/// No retries are attempted; a failure here aborts the run. The session keeps
/// the driver's UTC time zone, which `TIMESTAMP` reads and writes rely on.
pub async fn connect(url: &str) -> Result<DatabaseConnection> {
    if url.is_empty() {
        return Err(DatabaseError::InvalidConfiguration {
            message: "Database URL cannot be empty".to_string(),
        }
        .into());
    }

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .map_err(|source| DatabaseError::ConnectionFailed { source })?;

    log::info!("Connected to {:?} database", db.get_database_backend());
    Ok(db)
}

/// Health check for the database connection.
///
/// Executes `SELECT 1` to verify the connection is usable.
pub async fn health_check(db: &DatabaseConnection) -> Result<()> {
    use sea_orm::Statement;

    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());

    db.query_one(stmt)
        .await
        .context("Database health check failed")?;

    Ok(())
}

/// Closes the connection. Close failures are logged, never propagated, so the
/// outcome of the run is what the caller reports.
pub async fn release(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => log::debug!("Database connection released"),
        Err(e) => log::warn!("Failed to close database connection cleanly: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_url_is_rejected() {
        let result = connect("").await;

        assert!(matches!(
            result.unwrap_err().downcast::<DatabaseError>(),
            Ok(DatabaseError::InvalidConfiguration { .. })
        ));
    }

    #[tokio::test]
    async fn connects_and_passes_health_check() {
        let db = connect("sqlite::memory:")
            .await
            .unwrap();
        health_check(&db).await.unwrap();
        release(db).await;
    }
}
