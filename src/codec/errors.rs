//! Codec error taxonomy.

use thiserror::Error;

use crate::core::version::VersionParseError;

/// Error decoding or encoding a profile document.
///
/// Resource errors are propagated unchanged after the underlying stream has
/// been released; this layer never retries.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document is malformed: required top-level fields (`Types`,
    /// `Modules`) are missing or a field has the wrong structure.
    #[error("malformed profile document: {0}")]
    Format(#[from] serde_json::Error),

    /// A version field could not be parsed as 2-4 dotted numeric
    /// components.
    #[error(transparent)]
    VersionParse(#[from] VersionParseError),

    /// The underlying stream failed to read or write.
    #[error("profile I/O failed: {0}")]
    Resource(#[from] std::io::Error),
}

impl CodecError {
    /// Whether this is a document problem (as opposed to an I/O one), i.e.
    /// retrying the same bytes could never succeed.
    pub fn is_document_error(&self) -> bool {
        matches!(self, CodecError::Format(_) | CodecError::VersionParse(_))
    }
}
