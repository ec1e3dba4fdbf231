//! Landing page configuration.
//!
//! In the browser the defaults are used as-is ([`LandingConfig::default`]).
//! Native builds can override them from the environment.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BILLEASE_CART_KEY` - Storage key for the cart (default: `billeasy_cart`)
//! - `BILLEASE_THEME_KEY` - Storage key for the theme (default: `billeasy_theme`)
//! - `BILLEASE_STORE_PATH` - File backing the native store (default: `billease-store.json`)
//! - `BILLEASE_NOTIFICATION_MS` - Cart notification lifetime (default: 3000)
//! - `BILLEASE_SUCCESS_NOTIFICATION_MS` - Contact form success lifetime (default: 5000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cart::CART_KEY;
use crate::theme::THEME_KEY;

const DEFAULT_STORE_PATH: &str = "billease-store.json";
const DEFAULT_NOTIFICATION_MS: u64 = 3_000;
const DEFAULT_SUCCESS_NOTIFICATION_MS: u64 = 5_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Landing page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingConfig {
    /// Where persisted state lives
    pub storage: StorageConfig,
    /// How long notifications stay on screen
    pub notifications: NotificationConfig,
}

/// Storage keys and the native store location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Key holding the JSON cart array
    pub cart_key: String,
    /// Key holding `"light"` or `"dark"`
    pub theme_key: String,
    /// File used by [`FileStore`](crate::storage::FileStore) in native builds
    pub file_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: CART_KEY.to_owned(),
            theme_key: THEME_KEY.to_owned(),
            file_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

/// Notification display durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Lifetime of cart notifications ("Pro plan added to cart!")
    pub cart: Duration,
    /// Lifetime of the contact form success message
    pub success: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            cart: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
            success: Duration::from_millis(DEFAULT_SUCCESS_NOTIFICATION_MS),
        }
    }
}

impl LandingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a duration variable is not a whole number of
    /// milliseconds or a storage key is blank.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`LandingConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = StorageConfig::default();

        let storage = StorageConfig {
            cart_key: get_key(&lookup, "BILLEASE_CART_KEY", defaults.cart_key)?,
            theme_key: get_key(&lookup, "BILLEASE_THEME_KEY", defaults.theme_key)?,
            file_path: lookup("BILLEASE_STORE_PATH")
                .map_or(defaults.file_path, PathBuf::from),
        };

        let notifications = NotificationConfig {
            cart: get_millis(&lookup, "BILLEASE_NOTIFICATION_MS", DEFAULT_NOTIFICATION_MS)?,
            success: get_millis(
                &lookup,
                "BILLEASE_SUCCESS_NOTIFICATION_MS",
                DEFAULT_SUCCESS_NOTIFICATION_MS,
            )?,
        };

        Ok(Self {
            storage,
            notifications,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a storage key, rejecting blank values.
fn get_key(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: String,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be blank".to_string(),
        )),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default),
    }
}

/// Get a duration in milliseconds with a default value.
fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let millis = match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?,
        None => default,
    };
    Ok(Duration::from_millis(millis))
}
