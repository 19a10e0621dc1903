use std::time::Duration;

use thiserror::Error;

/// Errors produced by the document store layer.
///
/// Covers transport failures against the remote backend, serialization of
/// records to and from their document form, and operation deadlines. All
/// variants result in a 500 Internal Server Error with a generic message
/// returned to the client; details are logged server-side.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store operation did not complete within the configured deadline.
    #[error("Store operation timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// HTTP transport error while talking to the store backend.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Record could not be serialized to or deserialized from its document form.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// Store backend answered with a non-success status.
    #[error("Store request failed with status {status}: {message}")]
    Backend { status: u16, message: String },

    /// In-memory backend lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    LockPoisoned,
}
