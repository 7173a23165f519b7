//! Operation step error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    /// A step ran before its source or destination was chosen.
    #[error("{what} not selected")]
    SourceUnselected { what: &'static str },

    /// A new profile needs a non-empty name.
    #[error("profile name can't be empty")]
    EmptyName,

    /// The target must not be overwritten.
    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] pitwall_store::StoreError),

    #[error(transparent)]
    Codec(#[from] pitwall_codec::CodecError),

    #[error(transparent)]
    Part(#[from] pitwall_core::PartError),

    #[error(transparent)]
    Remote(#[from] pitwall_remote::RemoteError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
