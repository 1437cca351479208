//! Error types for block composition, rendering and persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, rendering or saving a document.
///
/// Every error is returned at the point of violation. Nothing is retried and a
/// failing operation leaves the document as it was before the call.
#[derive(Debug, Error)]
pub enum SdocError {
    /// A document was attached under another block
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    /// A block was attached somewhere it cannot live (e.g. a table of contents inside a row)
    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),
    /// `save` was called without an explicit or stored destination
    #[error("No destination provided")]
    MissingDestination,
    /// A block type supplied no template of its own
    #[error("Block '{0}' does not provide a template")]
    AbstractUsage(String),
    /// A block was constructed from invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No factory is registered under this block type name
    #[error("Block type '{0}' not found")]
    UnknownBlockType(String),
    /// The template renderer rejected a template or context
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    /// Reading an asset or writing the destination failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SdocError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = SdocError> = std::result::Result<T, E>;
