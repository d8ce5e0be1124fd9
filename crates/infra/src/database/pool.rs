//! SQLite connection pool construction.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::InfraError;

/// Shared alias for the r2d2-backed SQLite pool.
pub type SqlitePool = Pool<SqliteConnectionManager>;

/// A connection checked out of a [`SqlitePool`].
pub type SqliteConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Build a pool over the given database file, with the workspace pragmas
/// applied to every connection as it is created.
pub fn create_sqlite_pool(path: &Path, max_size: u32) -> Result<SqlitePool, InfraError> {
    let manager = SqliteConnectionManager::file(path).with_init(|conn| {
        // journal_mode returns a result row, so it cannot go through
        // pragma_update.
        conn.query_row("PRAGMA journal_mode = WAL", [], |_row| Ok(()))?;
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.pragma_update(None, "busy_timeout", 5_000)?;
        Ok(())
    });

    Pool::builder().max_size(max_size.max(1)).build(manager).map_err(InfraError::from)
}
