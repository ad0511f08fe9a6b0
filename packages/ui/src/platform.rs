//! Platform-appropriate storage constructor.
//!
//! Returns a [`store::KeyValueStore`] for the current target:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native** (tests, tooling): process-local [`store::MemoryStore`]

/// Create the key-value store the sign-in workflow persists credentials into.
pub fn make_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
