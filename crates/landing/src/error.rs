//! Unified error handling.
//!
//! Only infrastructure failures are errors. Empty-cart checkouts, unknown
//! plans, stale indices and malformed stored data are handled in place and
//! never reach this type.

use thiserror::Error;

use crate::cart::CartActionError;
use crate::storage::StorageError;

/// Library-level error type for the landing page.
#[derive(Debug, Error)]
pub enum LandingError {
    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// State could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A cart control could not be decoded.
    #[error("Cart action error: {0}")]
    CartAction(#[from] CartActionError),
}

/// Result type alias for `LandingError`.
pub type Result<T> = std::result::Result<T, LandingError>;
