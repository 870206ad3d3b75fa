//! # strata_ir - Patch Hand-off
//!
//! Components never share a mutable scene. Each one edits a private diff,
//! commits it into an immutable patch and pushes it through a portal; every
//! other component merges the patch into its own origin.
//!
//! ## Architecture
//!
//! ```text
//! Component A ──commit──► Patch ──► Gate A ──┐
//!                                            ├──► Gate B ──pop──► apply ──► origin B
//!                                            └──► Gate C ──pop──► apply ──► origin C
//! ```
//!
//! ## Key Concepts
//!
//! - **Patch**: a diff tree frozen behind an `Arc`
//! - **PatchPortal / PatchGate**: linked queues, one gate per component
//! - **SceneReplica**: origin/diff pair with commit and sync
//! - **json**: lossy text adapter for property trees
//! - **PropertyTreeResource**: an immutable tree loaded from JSON

pub mod error;
pub mod json;
pub mod loader;
pub mod patch;
pub mod portal;
pub mod replica;

pub use error::{PatchError, Result};
pub use json::{parse_json_reader, parse_json_to_property, to_string, try_parse_json};
pub use loader::{load_property_tree, load_property_tree_file, PropertyTreeResource};
pub use patch::{apply, commit, Patch, PatchPtr};
pub use portal::{PatchGate, PatchPortal, PatchPortalConfig, PatchPortalStats};
pub use replica::SceneReplica;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{PatchError, Result};
    pub use crate::patch::{Patch, PatchPtr};
    pub use crate::portal::{PatchGate, PatchPortal, PatchPortalConfig};
    pub use crate::replica::SceneReplica;
}
