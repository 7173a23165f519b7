//! Remote sync error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    /// Sync is not configured; the feature is disabled, not broken.
    #[error("sync is not configured: set sync.base_url and sync.auth_key in the Pitwall config")]
    NotConfigured,

    /// The server answered with a non-success status.
    #[error("sync server error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
