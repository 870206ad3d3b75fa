//! The root object of a world, carrying the frame's event queue

use core::ops::Deref;

use strata_core::{Property, PropertyType};

use crate::error::Result;
use crate::event::{ConstReflectedEvent, ReflectedEvent};
use crate::item::{reflected_view, FromReflected, ReflectedItemBase};
use crate::object::ReflectedObjectBase;
use crate::range::{ReflectedRange, ReflectedRangeMut};

const EVENTS: &str = "events";

reflected_view! {
    /// An object with an append-only `events` array
    ReflectedSceneBase : ReflectedObjectBase, ReflectedScene, ConstReflectedScene
}

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for ReflectedSceneBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        Ok(Self {
            inner: ReflectedObjectBase::from_item(item)?,
        })
    }
}

impl<'a> ReflectedSceneBase<'a, &'a mut Property> {
    /// Append a new event after those already in the diff
    ///
    /// The new slot is paired with the origin event at the same index, if
    /// there is one.
    pub fn push_event<'s, T>(&'s mut self) -> Result<T>
    where
        T: FromReflected<'s, &'s mut Property>,
    {
        let events = self
            .reborrow()
            .into_base()
            .into_typed_child(EVENTS, PropertyType::Array)?;
        let index = events.diff_property().size()?;
        events.into_custom_child(index)
    }

    /// Events already present in the diff
    pub fn events(&mut self) -> Result<ReflectedRangeMut<'_, ReflectedEvent<'_>>> {
        self.reborrow().into_base().into_child_range(EVENTS)
    }
}

impl<'a> ReflectedSceneBase<'a, &'a Property> {
    /// Events of both sides, in index order
    pub fn events(&self) -> Result<ReflectedRange<'a, ConstReflectedEvent<'a>>> {
        self.into_base()
            .into_typed_child(EVENTS, PropertyType::Array)?
            .range()
    }
}
