//! Key-value storage backends.
//!
//! Every piece of persisted landing-page state (the cart and the theme
//! preference) lives under a single string key holding a string value, the
//! same shape as `window.localStorage`. [`KeyValueStore`] is that shape as a
//! trait so the cart and theme logic can run against:
//!
//! - [`MemoryStore`] - in-memory map, used by tests
//! - [`FileStore`] - JSON object on disk, used by the CLI (native only)
//! - `BrowserStore` - `window.localStorage` (`wasm32` with the `browser` feature)

use std::path::PathBuf;

use thiserror::Error;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub use browser::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The browser refused the operation (storage disabled, quota exceeded).
    #[error("browser storage error: {0}")]
    Browser(String),
}

/// A string-keyed, string-valued persistent store.
///
/// Implementations take `&self`: backends like `localStorage` are global to
/// the page, and the in-memory fake shares its map between clones.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
