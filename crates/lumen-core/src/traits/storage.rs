use std::sync::Arc;

use crate::errors::LumenResult;

/// Durable string key-value storage used by the trend cache.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> LumenResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> LumenResult<()>;
}

impl<T: IKeyValueStore + ?Sized> IKeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> LumenResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> LumenResult<()> {
        (**self).set(key, value)
    }
}
