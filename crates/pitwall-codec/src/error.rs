//! Codec error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The archive container is malformed or could not be written.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A part document inside the container failed to (de)serialize.
    #[error(transparent)]
    Part(#[from] pitwall_core::PartError),

    /// A sheet could not be rendered.
    #[error("sheet error: {0}")]
    Sheet(#[from] csv::Error),

    /// Underlying I/O failure while reading or writing container bytes.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
