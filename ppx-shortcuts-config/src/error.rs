//! Typed errors for settings storage.
//!
//! Storage failures are never swallowed: `SettingsStore::load` and
//! `SettingsStore::save` hand them back to the caller, which decides whether
//! to fall back to defaults or retry.

use thiserror::Error;

/// Errors raised by a storage provider.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage area is available (e.g. no home directory to place it in).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data could not be encoded or decoded as JSON.
    #[error("storage data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider reported a failure of its own.
    #[error("storage provider error: {0}")]
    Transport(String),
}
