//! In-memory store for tests and sessions that do not need durability.

use dashmap::DashMap;

use lumen_core::errors::LumenResult;
use lumen_core::traits::IKeyValueStore;

/// Concurrent map implementing [`IKeyValueStore`]. Never fails.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: DashMap<String, String>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl IKeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> LumenResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> LumenResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
