//! Error types for the core data model

use thiserror::Error;

use crate::property::PropertyType;

/// Errors raised by [`Property`](crate::Property) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The value holds a different kind than the operation requires
    #[error("Property cast failed: expected {expected}, found {found}")]
    Cast {
        expected: &'static str,
        found: PropertyType,
    },

    /// Removal of a key or index that does not exist
    #[error("Property key or index is out of range")]
    OutOfRange,

    /// Argument rejected before touching the tree
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Iterator entry asked for a key on an array or an index on a dictionary
    #[error("Iterator entry does not carry a {0}")]
    IteratorType(&'static str),
}

impl PropertyError {
    /// Shorthand for a cast failure against a single expected kind
    pub fn cast(expected: PropertyType, found: PropertyType) -> Self {
        Self::Cast {
            expected: expected.name(),
            found,
        }
    }

    /// Cast failure where several kinds would have been accepted
    pub fn cast_to(expected: &'static str, found: PropertyType) -> Self {
        Self::Cast { expected, found }
    }

    /// Check whether this is a cast failure
    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast { .. })
    }
}

/// Result type for property operations
pub type Result<T> = std::result::Result<T, PropertyError>;
