//! # Key-value persistence — the storage seam of the sign-in portal
//!
//! Everything the portal persists goes through the [`KeyValueStore`] trait: a
//! string-keyed, string-valued map with the same shape as the browser's
//! `localStorage`. The sign-in workflow only ever writes to it (the token and the
//! user payload after a successful login), so it can be exercised in tests
//! against [`crate::MemoryStore`] and in the browser against `LocalStore`.
//!
//! ## Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`get`](KeyValueStore::get) | Returns the raw string stored under a key, if any. |
//! | [`set`](KeyValueStore::set) | Stores a raw string, replacing any previous value. |
//! | [`remove`](KeyValueStore::remove) | Deletes a key. Removing a missing key is not an error. |
//! | [`set_json`](KeyValueStore::set_json) | Serialises a value with `serde_json` and stores the text. |
//! | [`get_json`](KeyValueStore::get_json) | Reads a key and deserialises it, returning `None` on a missing key or bad JSON. |

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::StoreError;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Store `value` as a JSON document under `key`.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Load a JSON document from `key`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
