//! Database connection manager backed by the shared SQLite pool.

use std::path::{Path, PathBuf};

use petclinic_domain::{ClinicError, Result};
use rusqlite::{params, Transaction};
use tracing::info;

use super::pool::{create_sqlite_pool, SqliteConnection, SqlitePool};
use crate::errors::InfraError;

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");
const SAMPLE_DATA_SQL: &str = include_str!("sample_data.sql");

/// Database manager that wraps an r2d2 [`SqlitePool`].
pub struct DbManager {
    pool: SqlitePool,
    path: PathBuf,
}

impl DbManager {
    /// Create a new manager with the given pool size.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let pool = create_sqlite_pool(&path, pool_size).map_err(ClinicError::from)?;

        info!(
            db_path = %path.display(),
            max_connections = pool.max_size(),
            "sqlite pool initialised"
        );

        Ok(Self { pool, path })
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<SqliteConnection> {
        self.pool.get().map_err(|e| ClinicError::from(InfraError::from(e)))
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, CAST(strftime('%s','now') AS INTEGER))",
            params![SCHEMA_VERSION],
        )
        .map_err(map_sql_error)?;
        Ok(())
    }

    /// Load the sample clinic data set (owners, pets, types, vets, visits).
    ///
    /// Idempotent: the inserts carry fixed ids and are skipped when already
    /// present.
    pub fn load_sample_data(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(SAMPLE_DATA_SQL).map_err(map_sql_error)?;
        info!(db_path = %self.path.display(), "sample data loaded");
        Ok(())
    }

    /// Run `f` inside a transaction scope: commit on `Ok`, roll back on
    /// `Err` or when the scope unwinds before the commit.
    pub fn with_transaction<T>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction().map_err(map_sql_error)?;
        let value = f(&tx)?;
        tx.commit().map_err(map_sql_error)?;
        Ok(value)
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Perform a health check to verify database connectivity.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0)).map_err(map_sql_error)?;
        Ok(())
    }
}

pub(crate) fn map_sql_error(err: rusqlite::Error) -> ClinicError {
    ClinicError::from(InfraError::from(err))
}

pub(crate) fn map_join_error(err: tokio::task::JoinError) -> ClinicError {
    ClinicError::Internal(format!("Task join error: {err}"))
}
