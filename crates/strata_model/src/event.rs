//! Scene events
//!
//! An event is a flat dictionary discriminated by its `source` and `type`
//! strings. Concrete event views (see [`crate::io`]) stamp both fields when
//! built over a writable pair and verify them when built read-only.

use core::ops::Deref;

use strata_core::Property;

use crate::error::{ModelError, Result};
use crate::item::{check_node, leaf_items, reflected_view, FromReflected, ReflectedItemBase};

reflected_view! {
    /// A generic event
    ReflectedEventBase : ReflectedItemBase, ReflectedEvent, ConstReflectedEvent
}

leaf_items!(ReflectedEventBase {
    /// Subsystem that produced the event
    source => "source" : String,
    /// What happened
    action => "action" : String,
    /// Event kind within the source
    event_type => "type" : String,
});

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for ReflectedEventBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        check_node(&item)?;
        Ok(Self { inner: item })
    }
}

impl<'a> ReflectedEventBase<'a, &'a mut Property> {
    /// Write both discriminators
    pub(crate) fn stamp(&mut self, source: &'static str, event_type: &'static str) -> Result<()> {
        self.source()?.set(source);
        self.event_type()?.set(event_type);
        Ok(())
    }
}

impl<'a> ReflectedEventBase<'a, &'a Property> {
    /// Fail unless both discriminators match
    pub(crate) fn verify(&self, source: &'static str, event_type: &'static str) -> Result<()> {
        for (item, expected) in [(self.source()?, source), (self.event_type()?, event_type)] {
            if item != expected {
                return Err(ModelError::UnexpectedEvent {
                    expected,
                    found: item.as_string().unwrap_or_default(),
                });
            }
        }
        Ok(())
    }
}
