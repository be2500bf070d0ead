//! # lumen-storage
//!
//! Durable string key-value storage behind [`IKeyValueStore`]:
//! a SQLite-backed store for production and a concurrent in-memory map for
//! tests and ephemeral sessions.
//!
//! [`IKeyValueStore`]: lumen_core::traits::IKeyValueStore

pub mod memory;
pub mod migrations;
pub mod pragmas;
pub mod sqlite;

pub use memory::InMemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

use lumen_core::errors::{LumenError, StorageError};

/// Wrap a SQLite failure message as a [`LumenError`].
pub(crate) fn to_storage_err(message: String) -> LumenError {
    StorageError::Sqlite { message }.into()
}
