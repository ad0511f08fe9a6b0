//! # Browser `localStorage` store — web-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It writes straight into `window.localStorage` through `web-sys`,
//! so values survive reloads until the user or the origin clears them.
//!
//! ## Connection management
//!
//! `LocalStore` is a zero-size, `Clone` struct that looks up the `Storage`
//! handle on every call. The browser hands back the same object each time.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`. Writes surface them as
//! [`StoreError`]: `localStorage` throws when the quota is exceeded or when
//! storage is disabled (e.g. some private browsing modes).

use crate::kv::KeyValueStore;
use crate::StoreError;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
