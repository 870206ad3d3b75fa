//! Presentations: typed facades over an object's per-subsystem sub-tree
//!
//! Every presentation lives at `properties.<ID>` of its object and owns two
//! sub-dictionaries of its own: `properties` for plain fields and `states`
//! for per-state settings.

pub mod location;
pub mod script;

use core::ops::Deref;

use strata_core::{Property, PropertyType};

use crate::error::Result;
use crate::item::{check_node, reflected_view, ConstReflectedItem, FromReflected, ReflectedItem, ReflectedItemBase};
use crate::range::{ReflectedRange, ReflectedRangeMut};

const PROPERTIES: &str = "properties";
const STATES: &str = "states";

/// A presentation reachable through [`ReflectedObject::presentation`](crate::ReflectedObject::presentation)
pub trait NamedPresentation {
    /// Key of the presentation under the object's `properties`
    const ID: &'static str;
}

reflected_view! {
    /// Shared base of every presentation
    ReflectedPresentationBase : ReflectedItemBase, ReflectedPresentation, ConstReflectedPresentation
}

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for ReflectedPresentationBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        check_node(&item)?;
        Ok(Self { inner: item })
    }
}

impl<'a> ReflectedPresentationBase<'a, &'a mut Property> {
    /// Consume the view and open its `properties` dictionary
    pub fn into_properties(self) -> Result<ReflectedItem<'a>> {
        self.into_base().into_typed_child(PROPERTIES, PropertyType::Dictionary)
    }

    pub fn properties(&mut self) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_properties()
    }

    /// Consume the view and open the state `id` as `S`
    pub fn into_state<S>(self, id: &str) -> Result<S>
    where
        S: FromReflected<'a, &'a mut Property>,
    {
        self.into_base()
            .into_typed_child(STATES, PropertyType::Dictionary)?
            .into_custom_child(id)
    }

    pub fn state<'s, S>(&'s mut self, id: &str) -> Result<S>
    where
        S: FromReflected<'s, &'s mut Property>,
    {
        self.reborrow().into_state(id)
    }

    /// States already present in the diff
    pub fn states<'s, S>(&'s mut self) -> Result<ReflectedRangeMut<'s, S>> {
        self.reborrow().into_base().into_child_range(STATES)
    }
}

impl<'a> ReflectedPresentationBase<'a, &'a Property> {
    pub fn into_properties(self) -> Result<ConstReflectedItem<'a>> {
        self.into_base().into_typed_child(PROPERTIES, PropertyType::Dictionary)
    }

    pub fn properties(&self) -> Result<ConstReflectedItem<'a>> {
        self.into_properties()
    }

    pub fn into_state<S>(self, id: &str) -> Result<S>
    where
        S: FromReflected<'a, &'a Property>,
    {
        self.into_base()
            .into_typed_child(STATES, PropertyType::Dictionary)?
            .into_custom_child(id)
    }

    pub fn state<S>(&self, id: &str) -> Result<S>
    where
        S: FromReflected<'a, &'a Property>,
    {
        self.into_state(id)
    }

    /// States of both sides
    pub fn states<S>(&self) -> Result<ReflectedRange<'a, S>> {
        self.into_base()
            .into_typed_child(STATES, PropertyType::Dictionary)?
            .range()
    }
}
