//! Patches - immutable snapshots of a diff tree
//!
//! A producer edits a private diff through reflected views, then commits it
//! into a [`PatchPtr`]. From that point the tree is shared and read-only;
//! every consumer merges it into its own origin with [`apply`].

use std::sync::Arc;

use strata_core::Property;

use crate::error::Result;

/// A diff tree handed between components
pub type Patch = Property;

/// Shared read-only handle to a [`Patch`]
pub type PatchPtr = Arc<Patch>;

/// Capture `diff` into a patch, leaving it empty
///
/// Returns `None` when there is nothing to hand off.
pub fn commit(diff: &mut Property) -> Option<PatchPtr> {
    if diff.is_none() {
        return None;
    }
    Some(Arc::new(diff.take()))
}

/// Merge `patch` into `origin`
///
/// A kind mismatch anywhere in the patch fails without touching `origin`.
pub fn apply(origin: &mut Property, patch: &Patch) -> Result<()> {
    Property::replace_from(origin, patch)?;
    Ok(())
}
