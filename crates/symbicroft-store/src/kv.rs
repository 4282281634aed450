//! Typed key-value wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{StorageBackend, StoreError};

/// Type-safe store over any [`StorageBackend`].
///
/// Values are encoded as JSON strings, the same layout a browser keeps in
/// `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct Store<B> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist. A value that exists but does
    /// not decode as `T` is reported as [`StoreError::Corrupt`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<CartItem>> = store.get("symbicroft_cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get_item(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corrupt {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Set a value in the store, replacing whatever was there.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("symbicroft_cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove_item(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.backend.get_item(key)?.is_some())
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.backend.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStorage, UnavailableStorage};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: i64,
        name: String,
    }

    #[test]
    fn test_typed_roundtrip() {
        let store = Store::new(MemoryStorage::new());
        let entries = vec![Entry { id: 1, name: "Masala".into() }];
        store.set("k", &entries).unwrap();
        let back: Vec<Entry> = store.get("k").unwrap().unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_value_is_plain_json() {
        let storage = MemoryStorage::new();
        let store = Store::new(storage.clone());
        store.set("k", &vec![1, 2, 3]).unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "{not json").unwrap();
        let store = Store::new(storage);
        let err = store.get::<Vec<Entry>>("k").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "k"));
    }

    #[test]
    fn test_exists_and_delete() {
        let store = Store::new(MemoryStorage::new());
        assert!(!store.exists("k").unwrap());
        store.set("k", &true).unwrap();
        assert!(store.exists("k").unwrap());
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_unavailable_propagates() {
        let store = Store::new(UnavailableStorage);
        assert!(store.get::<i64>("k").unwrap_err().is_unavailable());
    }
}
