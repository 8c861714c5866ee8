use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::config::DatabaseSettings;
use crate::errors::Result;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    if settings.is_memory() {
        // Every in-memory connection is its own database, so keep exactly one alive.
        let manager = build_manager(SqliteConnectionManager::memory());
        return build_pool(manager, 1, true);
    }

    let manager = build_manager(SqliteConnectionManager::file(&settings.path));
    build_pool(manager, settings.pool_size.max(1), false)
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32, pinned: bool) -> Result<DbPool> {
    let mut builder = r2d2::Pool::builder().max_size(max_size);
    if pinned {
        builder = builder.idle_timeout(None).max_lifetime(None);
    }

    let pool = builder.build(manager)?;
    Ok(pool)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    let conn = pool.get()?;
    Ok(conn)
}
