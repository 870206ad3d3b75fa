//! Spatial placement of an object
//!
//! Layout under the presentation's `properties`:
//! `position.{x,y,z}`, `quaternion.{x,y,z,w}` and `scale.{x,y,z}`, all
//! doubles.

use core::ops::Deref;

use strata_core::Property;

use crate::error::Result;
use crate::item::{check_node, leaf_items, reflected_view, FromReflected, ReflectedItemBase};

use super::{NamedPresentation, ReflectedPresentationBase};

reflected_view! {
    /// Three double components
    PositionPresentationBase : ReflectedItemBase, PositionPresentation, ConstPositionPresentation
}

leaf_items!(PositionPresentationBase {
    x => "x" : Double,
    y => "y" : Double,
    z => "z" : Double,
});

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for PositionPresentationBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        check_node(&item)?;
        Ok(Self { inner: item })
    }
}

reflected_view! {
    /// Rotation as a quaternion; derefs to the `x`/`y`/`z` part
    QuaternionPresentationBase : PositionPresentationBase, QuaternionPresentation, ConstQuaternionPresentation
}

leaf_items!(QuaternionPresentationBase {
    w => "w" : Double,
});

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for QuaternionPresentationBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        Ok(Self {
            inner: PositionPresentationBase::from_item(item)?,
        })
    }
}

/// Per-axis scale factors share the position layout
pub type ScalePresentationBase<'a, D> = PositionPresentationBase<'a, D>;
pub type ScalePresentation<'a> = PositionPresentation<'a>;
pub type ConstScalePresentation<'a> = ConstPositionPresentation<'a>;

reflected_view! {
    /// The `location` presentation
    PresentationBase : ReflectedPresentationBase, Presentation, ConstPresentation
}

impl<'a, D> NamedPresentation for PresentationBase<'a, D> {
    const ID: &'static str = "location";
}

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for PresentationBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        Ok(Self {
            inner: ReflectedPresentationBase::from_item(item)?,
        })
    }
}

impl<'a> PresentationBase<'a, &'a mut Property> {
    pub fn position(&mut self) -> Result<PositionPresentation<'_>> {
        self.reborrow().inner.into_properties()?.into_custom_child("position")
    }

    pub fn quaternion(&mut self) -> Result<QuaternionPresentation<'_>> {
        self.reborrow().inner.into_properties()?.into_custom_child("quaternion")
    }

    pub fn scale(&mut self) -> Result<ScalePresentation<'_>> {
        self.reborrow().inner.into_properties()?.into_custom_child("scale")
    }
}

impl<'a> PresentationBase<'a, &'a Property> {
    pub fn position(&self) -> Result<ConstPositionPresentation<'a>> {
        self.inner.into_properties()?.into_custom_child("position")
    }

    pub fn quaternion(&self) -> Result<ConstQuaternionPresentation<'a>> {
        self.inner.into_properties()?.into_custom_child("quaternion")
    }

    pub fn scale(&self) -> Result<ConstScalePresentation<'a>> {
        self.inner.into_properties()?.into_custom_child("scale")
    }
}
