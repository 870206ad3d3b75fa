//! Error types for reflected overlays

use strata_core::{PropertyError, PropertyType};
use thiserror::Error;

/// Errors raised by overlay views
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A leaf or node holds a kind the view cannot represent
    #[error("Unexpected item type: expected {expected}, found {found}")]
    UnexpectedItemType {
        expected: &'static str,
        found: PropertyType,
    },

    /// Event discriminator does not match the requested event view
    #[error("Unexpected event: expected {expected}, found {found:?}")]
    UnexpectedEvent {
        expected: &'static str,
        found: String,
    },

    /// An id or path was empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Failure inside the underlying property tree
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl ModelError {
    pub(crate) fn unexpected(expected: &'static str, found: PropertyType) -> Self {
        Self::UnexpectedItemType { expected, found }
    }

    /// Check whether this is an unexpected-item-type failure
    pub fn is_unexpected_item_type(&self) -> bool {
        matches!(self, Self::UnexpectedItemType { .. } | Self::UnexpectedEvent { .. })
    }
}

/// Result type for overlay operations
pub type Result<T> = std::result::Result<T, ModelError>;
