//! SqliteKeyValueStore: a single `kv_store` table behind one connection.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use lumen_core::config::StorageConfig;
use lumen_core::errors::{LumenResult, StorageError};
use lumen_core::traits::IKeyValueStore;

use crate::{migrations, pragmas, to_storage_err};

/// SQLite-backed durable storage. Writes are upserts; nothing is ever
/// deleted implicitly.
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    /// Open (or create) a store backed by a file on disk.
    pub fn open(path: &Path) -> LumenResult<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    /// Open a file-backed store with explicit storage settings.
    pub fn open_with(path: &Path, config: &StorageConfig) -> LumenResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, config.busy_timeout_ms)?;
        Self::initialize(conn)
    }

    /// Open the store at `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> LumenResult<Self> {
        Self::open_with(Path::new(&config.db_path), config)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> LumenResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> LumenResult<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> LumenResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            StorageError::Unavailable {
                reason: "connection mutex poisoned".into(),
            }
            .into()
        })
    }

    /// Remove a key. Returns whether a row was deleted.
    pub fn delete(&self, key: &str) -> LumenResult<bool> {
        let conn = self.lock()?;
        let removed = conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(removed > 0)
    }

    /// Number of stored keys.
    pub fn len(&self) -> LumenResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> LumenResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl IKeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> LumenResult<Option<String>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> LumenResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().timestamp_millis()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        let conn = store.lock().unwrap();
        migrations::run_migrations(&conn).unwrap();
        assert_eq!(
            migrations::current_version(&conn).unwrap(),
            migrations::LATEST_VERSION
        );
    }

    #[test]
    fn delete_reports_whether_a_row_existed() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        store.set("k", "v").unwrap();
        assert!(store.delete("k").unwrap());
        assert!(!store.delete("k").unwrap());
        assert!(store.is_empty().unwrap());
    }
}
