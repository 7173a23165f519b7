//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No profile directory with this name.
    #[error("profile '{name}' not found")]
    NotFound { name: String },

    /// The target profile already exists.
    #[error("profile '{name}' already exists")]
    Conflict { name: String },

    /// The target profile is currently loaded and must not be overwritten.
    #[error("profile '{name}' is currently loaded")]
    Loaded { name: String },

    /// A profile name that the filesystem cannot represent.
    #[error("invalid profile name '{name}'")]
    InvalidName { name: String },

    /// Another live process holds the profile's write lock.
    #[error("profile '{name}' is write-locked by another process (pid {pid})")]
    LockHeld { name: String, pid: i32 },

    /// A persisted document failed to (de)serialize.
    #[error(transparent)]
    Part(#[from] pitwall_core::PartError),

    /// The registry document failed to parse.
    #[error("malformed registry document: {0}")]
    Registry(#[from] serde_json::Error),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
