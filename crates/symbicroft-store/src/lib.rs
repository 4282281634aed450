//! Key-value storage layer for Symbicroft.
//!
//! Mirrors the browser `localStorage` surface: string keys, string values,
//! whole-value replacement on every write. A typed [`Store`] wrapper adds
//! automatic JSON serialization on top of any [`StorageBackend`].
//!
//! # Example
//!
//! ```rust,ignore
//! use symbicroft_store::{MemoryStorage, Store};
//!
//! let store = Store::new(MemoryStorage::new());
//!
//! // Store a value
//! store.set("symbicroft_cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartItem>> = store.get("symbicroft_cart")?;
//!
//! // Delete a value
//! store.delete("symbicroft_cart")?;
//! ```

mod backend;
mod error;
mod file;
mod kv;

pub use backend::{MemoryStorage, StorageBackend, UnavailableStorage};
pub use error::StoreError;
pub use file::FileStorage;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStorage, MemoryStorage, StorageBackend, Store, StoreError};
}
