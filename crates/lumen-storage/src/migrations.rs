//! Schema migrations, tracked through `PRAGMA user_version`.

use rusqlite::Connection;
use tracing::info;

use lumen_core::errors::LumenResult;

use crate::to_storage_err;

/// Latest schema version this build knows how to create.
pub const LATEST_VERSION: u32 = 1;

const V001_KV_STORE: &str = "
    CREATE TABLE IF NOT EXISTS kv_store (
        key        TEXT PRIMARY KEY NOT NULL,
        value      TEXT NOT NULL,
        updated_at INTEGER NOT NULL
    );
";

/// Bring the schema up to [`LATEST_VERSION`].
pub fn run_migrations(conn: &Connection) -> LumenResult<()> {
    let current = current_version(conn)?;
    if current >= LATEST_VERSION {
        return Ok(());
    }

    if current < 1 {
        conn.execute_batch(V001_KV_STORE)
            .map_err(|e| to_storage_err(format!("migration v001 failed: {e}")))?;
    }

    conn.pragma_update(None, "user_version", LATEST_VERSION)
        .map_err(|e| to_storage_err(e.to_string()))?;
    info!(from = current, to = LATEST_VERSION, "storage schema migrated");
    Ok(())
}

/// The schema version recorded in the database.
pub fn current_version(conn: &Connection) -> LumenResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
