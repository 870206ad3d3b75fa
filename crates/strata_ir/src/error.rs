//! Error types for patch plumbing

use strata_core::PropertyError;
use strata_model::ModelError;
use thiserror::Error;

/// Errors raised while loading, applying or viewing patches
#[derive(Debug, Error)]
pub enum PatchError {
    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Patch does not fit the tree it is applied to
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// Overlay view rejected the tree
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for patch operations
pub type Result<T> = std::result::Result<T, PatchError>;
