//! # strata_core - Strata Core Data Model
//!
//! The value types every other layer is built on:
//! - **Keystring**: immutable shared string keys with a stable content hash
//! - **Property**: the dynamically-typed tree value with strict kind checks
//!   and a recursive type-checked merge
//!
//! ## Philosophy
//! Trees are plain values owned by one thread at a time. Change propagation
//! happens by handing immutable snapshots around, never by locking a tree.

pub mod error;
pub mod keystring;
pub mod property;

pub use error::{PropertyError, Result};
pub use keystring::Keystring;
pub use property::{Array, Dictionary, Property, PropertyIndex, PropertyKey, PropertyType, NONE};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{PropertyError, Result};
    pub use crate::keystring::Keystring;
    pub use crate::property::{Array, Dictionary, Property, PropertyIndex, PropertyType};
}
