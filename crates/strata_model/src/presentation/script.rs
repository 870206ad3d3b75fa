//! Script bindings of an object
//!
//! Each state under `states` names a script resource, the function to call
//! and free-form arguments for it.

use core::ops::Deref;

use strata_core::Property;

use crate::error::Result;
use crate::item::{check_node, leaf_items, reflected_view, ConstReflectedItem, FromReflected, ReflectedItem, ReflectedItemBase};

use super::{NamedPresentation, ReflectedPresentationBase};

reflected_view! {
    /// Script settings of one state
    StatePresentationBase : ReflectedItemBase, StatePresentation, ConstStatePresentation
}

leaf_items!(StatePresentationBase {
    /// Script resource id
    res_id => "res_id" : String,
    /// Function to invoke
    function => "function" : String,
});

impl<'a> StatePresentationBase<'a, &'a mut Property> {
    /// Arguments passed to the function, of any kind
    pub fn arguments(&mut self) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_base().into_child("arguments")
    }
}

impl<'a> StatePresentationBase<'a, &'a Property> {
    pub fn arguments(&self) -> Result<ConstReflectedItem<'a>> {
        self.into_base().into_child("arguments")
    }
}

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for StatePresentationBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        check_node(&item)?;
        Ok(Self { inner: item })
    }
}

reflected_view! {
    /// The `script` presentation
    PresentationBase : ReflectedPresentationBase, Presentation, ConstPresentation
}

impl<'a, D> NamedPresentation for PresentationBase<'a, D> {
    const ID: &'static str = "script";
}

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for PresentationBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        Ok(Self {
            inner: ReflectedPresentationBase::from_item(item)?,
        })
    }
}

impl<'a> PresentationBase<'a, &'a mut Property> {
    pub fn state(&mut self, id: &str) -> Result<StatePresentation<'_>> {
        self.reborrow().inner.into_state(id)
    }
}

impl<'a> PresentationBase<'a, &'a Property> {
    pub fn state(&self, id: &str) -> Result<ConstStatePresentation<'a>> {
        self.inner.into_state(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::NONE;

    #[test]
    fn test_state_fields() {
        let mut orig = Property::None;
        {
            let mut script = Presentation::new(&NONE, &mut orig).unwrap();
            let mut idle = script.state("idle").unwrap();
            idle.res_id().unwrap().set("scripts/idle.lua");
            idle.function().unwrap().set("on_idle");
            idle.arguments().unwrap().get_item(0usize).unwrap().set(3);
        }

        let mut diff = Property::None;
        let mut script = Presentation::new(&orig, &mut diff).unwrap();
        script.state("idle").unwrap().function().unwrap().set("on_wake");

        let view = script.const_ref();
        let idle = view.state("idle").unwrap();
        assert!(idle.res_id().unwrap() == "scripts/idle.lua");
        assert!(idle.function().unwrap() == "on_wake");
        assert!(idle.arguments().unwrap().get_item(0usize).unwrap() == 3i32);
        assert!(view.state("walk").unwrap().is_none());
    }
}
