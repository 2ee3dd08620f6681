use crate::{
    DatabaseOptions, DbError, Result, SqliteAuthService, SqliteProfileStore, SqliteScoreStore,
};

use fg_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{debug, info};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Handle to the game's SQLite file with the schema migrated.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        Self::connect_with(path, DatabaseOptions::default()).await
    }

    pub async fn connect_with(path: impl AsRef<Path>, options: DatabaseOptions) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        info!("Connecting to database: {}", path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .foreign_keys(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(options.busy_timeout),
            )
            .await?;

        Self::migrate(&pool).await?;
        info!("Database ready");

        Ok(Self { pool })
    }

    /// Private database that disappears with the handle
    pub async fn in_memory() -> Result<Self> {
        // Every connection to ":memory:" is its own database, so one is all we get
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(":memory:")
                    .foreign_keys(true),
            )
            .await?;

        Self::migrate(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn profile_store(&self) -> SqliteProfileStore {
        SqliteProfileStore::new(self.pool.clone())
    }

    pub fn score_store(&self) -> SqliteScoreStore {
        SqliteScoreStore::new(self.pool.clone())
    }

    pub fn auth_service(&self) -> SqliteAuthService {
        SqliteAuthService::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn migrate(pool: &SqlitePool) -> Result<()> {
        debug!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}
