//! Error types for the profile data model.

use thiserror::Error;

/// A persisted or imported profile part failed to (de)serialize.
#[derive(Debug, Error)]
pub enum PartError {
    /// A part document is present but malformed.
    #[error("malformed {part} document: {source}")]
    Decode {
        part: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A part could not be serialized.
    #[error("failed to encode {part} document: {source}")]
    Encode {
        part: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A raw string did not parse as a data point's kind.
#[derive(Debug, Error)]
#[error("invalid {kind} value '{raw}'")]
pub struct InvalidFieldValue {
    pub kind: &'static str,
    pub raw: String,
}
