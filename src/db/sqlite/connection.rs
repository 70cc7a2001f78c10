//! SQLite connection pool and migration management.

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{debug, info};

use super::{
    SqliteNoteRepository, SqliteReminderRepository, SqliteTaskRepository,
    SqliteWeatherHistoryRepository,
};
use crate::db::{Database, DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("data/sql/sqlite");

const MAX_CONNECTIONS: u32 = 5;

/// SQLite database implementation.
///
/// Sole owner of the connection pool. Repositories borrow the pool, which
/// avoids dynamic dispatch and keeps them free to construct.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: format!("{}: {}", path.display(), e),
            })?;

        info!(path = %path.display(), "Opened SQLite database");
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every pooled connection would get its own private memory database, so
    /// the pool is pinned to a single connection that never expires.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Direct access to the pool for tests and ad-hoc queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Tasks<'a> = SqliteTaskRepository<'a>;
    type Notes<'a> = SqliteNoteRepository<'a>;
    type Reminders<'a> = SqliteReminderRepository<'a>;
    type WeatherHistory<'a> = SqliteWeatherHistoryRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;
        debug!("Database migrations applied");
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        debug!("SQLite pool closed");
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        SqliteTaskRepository { pool: &self.pool }
    }

    fn notes(&self) -> Self::Notes<'_> {
        SqliteNoteRepository { pool: &self.pool }
    }

    fn reminders(&self) -> Self::Reminders<'_> {
        SqliteReminderRepository { pool: &self.pool }
    }

    fn weather_history(&self) -> Self::WeatherHistory<'_> {
        SqliteWeatherHistoryRepository { pool: &self.pool }
    }
}
