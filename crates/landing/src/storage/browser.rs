//! `window.localStorage` backend.

use gloo_storage::{LocalStorage, Storage};

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] over the page's `window.localStorage`.
///
/// Values are stored as raw strings, not JSON-encoded, so keys written here
/// stay compatible with plain `localStorage.getItem` callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// Create a handle to the page's local storage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn browser_error(action: &str, key: &str, err: &impl core::fmt::Debug) -> StorageError {
    StorageError::Browser(format!("failed to {action} {key}: {err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| browser_error("read", key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| browser_error("write", key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| browser_error("remove", key, &err))
    }
}
