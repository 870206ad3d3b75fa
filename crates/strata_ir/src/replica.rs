//! A component's private copy of the scene
//!
//! The replica keeps the last agreed state as its origin and collects local
//! edits in a diff. Committing folds the diff into the origin and hands it
//! out as a patch; syncing applies everybody else's patches.

use strata_core::Property;
use strata_model::{ConstReflectedScene, ReflectedScene};

use crate::error::Result;
use crate::patch::{self, Patch, PatchPtr};
use crate::portal::PatchGate;

/// Origin/diff pair of one component
#[derive(Debug, Clone, Default)]
pub struct SceneReplica {
    origin: Property,
    diff: Property,
}

impl SceneReplica {
    /// Create an empty replica
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a replica starting from `origin`
    pub fn from_origin(origin: Property) -> Self {
        Self {
            origin,
            diff: Property::None,
        }
    }

    /// Writable view for local edits
    pub fn scene(&mut self) -> Result<ReflectedScene<'_>> {
        Ok(ReflectedScene::new(&self.origin, &mut self.diff)?)
    }

    /// Read-only view of the state including local edits
    pub fn view(&self) -> Result<ConstReflectedScene<'_>> {
        Ok(ConstReflectedScene::new(&self.origin, &self.diff)?)
    }

    /// Last agreed state
    pub fn origin(&self) -> &Property {
        &self.origin
    }

    /// Local edits not committed yet
    pub fn diff(&self) -> &Property {
        &self.diff
    }

    /// Merge a patch from another component into the origin
    pub fn patch_scene(&mut self, patch: &Patch) -> Result<()> {
        patch::apply(&mut self.origin, patch)
    }

    /// Fold local edits into the origin and capture them as a patch
    ///
    /// On a kind mismatch both trees are left as they were.
    pub fn commit(&mut self) -> Result<Option<PatchPtr>> {
        if self.diff.is_none() {
            return Ok(None);
        }
        self.origin = Property::merge(&self.origin, &self.diff)?;
        Ok(patch::commit(&mut self.diff))
    }

    /// Commit and push the result through `gate`
    ///
    /// Returns whether anything was pushed.
    pub fn publish(&mut self, gate: &PatchGate) -> Result<bool> {
        match self.commit()? {
            Some(patch) => {
                gate.push(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply every patch waiting in `gate`, returning how many were applied
    pub fn sync(&mut self, gate: &PatchGate) -> Result<usize> {
        let mut applied = 0;
        while let Some(patch) = gate.pop() {
            self.patch_scene(&patch)?;
            applied += 1;
        }
        Ok(applied)
    }
}
