//! SQLite connection pooling.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::repository::RepositoryResult;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const IN_MEMORY_DATABASE_URL: &str = ":memory:";

const SCHEMA_SQL: &str = include_str!("../migrations/2025-03-13-000000_create_catalog/up.sql");

/// Opens a pool for `database_url` and makes sure the catalog tables exist.
///
/// An in-memory database lives inside a single connection, so the pool is
/// pinned to one long-lived connection in that case.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let builder = DbPool::builder();
    let builder = if database_url == IN_MEMORY_DATABASE_URL {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder
    };
    let pool = builder.build(manager)?;

    let mut conn = pool.get()?;
    conn.batch_execute(SCHEMA_SQL)?;

    log::debug!("Catalog schema ready at {database_url}");

    Ok(pool)
}
