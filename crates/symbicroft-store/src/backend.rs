//! Raw string-valued storage backends.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::StoreError;

/// A string key-value store with `localStorage` semantics.
///
/// Every `set_item` replaces the previous value for that key entirely.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Succeeds when the key is absent.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// List all keys. Backends that cannot enumerate return an empty list.
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }

    /// Whether the backend can be used at all in this context.
    fn is_available(&self) -> bool {
        true
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// In-process storage. Clones share the same partition.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage partition.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Storage for contexts with no persistent store (e.g. server-side rendering).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl UnavailableStorage {
    fn error() -> StoreError {
        StoreError::Unavailable("no storage in this execution context".to_string())
    }
}

impl StorageBackend for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(Self::error())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(Self::error())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Err(Self::error())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Err(Self::error())
    }

    fn is_available(&self) -> bool {
        false
    }
}
