//! # strata_model - Reflected Overlays
//!
//! Typed views over a pair of property trees: a read-only **origin** and a
//! **diff** holding pending changes.
//!
//! ```text
//! origin ─┐
//!         ├──► Reflected view ──► reads: diff, else origin
//! diff ───┘                   └─► writes: diff only
//! ```
//!
//! ## Key Concepts
//!
//! - **ReflectedItemBase**: the raw overlay over one node, with typed leaf
//!   access and kind checks
//! - **ReflectedObject / ReflectedScene**: scene-graph nodes with properties,
//!   tags, children and (for scenes) an event queue
//! - **Presentations**: per-subsystem facades stored under an object's
//!   `properties`
//! - **io events**: keyboard and mouse events that stamp or verify their
//!   discriminators
//! - **PathId**: slash-delimited addresses of nested objects
//!
//! Every view exists in a writable form (`Reflected*`, diff is
//! `&mut Property`) and a read-only form (`ConstReflected*`). Writable views
//! create diff nodes on demand; read-only views never touch either tree.

pub mod error;
pub mod event;
pub mod io;
pub mod item;
pub mod object;
pub mod path;
pub mod presentation;
pub mod range;
pub mod scene;

pub use error::{ModelError, Result};
pub use event::{ConstReflectedEvent, ReflectedEvent, ReflectedEventBase};
pub use item::{ConstReflectedItem, FromReflected, ReflectedItem, ReflectedItemBase};
pub use object::{ConstReflectedObject, ReflectedObject, ReflectedObjectBase};
pub use path::PathId;
pub use presentation::{ConstReflectedPresentation, NamedPresentation, ReflectedPresentation, ReflectedPresentationBase};
pub use range::{ReflectedRange, ReflectedRangeMut};
pub use scene::{ConstReflectedScene, ReflectedScene, ReflectedSceneBase};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{ModelError, Result};
    pub use crate::event::{ConstReflectedEvent, ReflectedEvent};
    pub use crate::item::{ConstReflectedItem, FromReflected, ReflectedItem};
    pub use crate::object::{ConstReflectedObject, ReflectedObject};
    pub use crate::path::PathId;
    pub use crate::presentation::NamedPresentation;
    pub use crate::scene::{ConstReflectedScene, ReflectedScene};
}
