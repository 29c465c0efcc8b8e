//! Error types for the body transformer.
//!
//! Parsing and serialization are the only fallible steps of a
//! transformation. Every other tree operation is total on a parsed document.

use thiserror::Error;

/// Main error type for the body transformer library.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Body could not be parsed as XML.
    #[error("failed to parse body as xml: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Transformed tree could not be written back to a string.
    #[error("failed to serialize transformed body: {0}")]
    Serialize(#[from] std::fmt::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for transformer operations.
pub type Result<T> = std::result::Result<T, TransformError>;
