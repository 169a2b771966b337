//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Values live in `window.localStorage`, so the login key persists across
//! reloads and tabs of the same origin.
//!
//! Failures (storage disabled, quota exceeded, private mode) are logged and
//! degrade to "not signed in" rather than crashing.

use crate::session::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window()?.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable");
        }
        storage
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("Could not store {}: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Could not remove {}: {:?}", key, e);
            }
        }
    }
}
