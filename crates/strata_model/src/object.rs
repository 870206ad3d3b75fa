//! Scene-graph nodes
//!
//! Tree layout of an object:
//!
//! ```text
//! {
//!   properties: { id, state, enabled, <name>: ..., <presentation id>: {...} },
//!   tags: [ ... ],
//!   children: { <child id>: <object>, ... }
//! }
//! ```
//!
//! A child removed through [`ReflectedObjectBase::remove_child`] stays in the
//! diff as an explicit `none`, which hides whatever the origin holds for it.

use core::ops::Deref;

use strata_core::{Property, PropertyType, NONE};

use crate::error::{ModelError, Result};
use crate::item::{check_node, reflected_view, ConstReflectedItem, FromReflected, ReflectedItem, ReflectedItemBase};
use crate::path::PathId;
use crate::presentation::NamedPresentation;
use crate::range::{is_tombstone, ReflectedRange, ReflectedRangeMut};

const PROPERTIES: &str = "properties";
const CHILDREN: &str = "children";
const TAGS: &str = "tags";

const ID: &str = "id";
const STATE: &str = "state";
const ENABLED: &str = "enabled";

reflected_view! {
    /// A node with properties, tags and child objects
    ReflectedObjectBase : ReflectedItemBase, ReflectedObject, ConstReflectedObject
}

impl<'a, D: Deref<Target = Property>> FromReflected<'a, D> for ReflectedObjectBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        check_node(&item)?;
        Ok(Self { inner: item })
    }
}

fn check_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ModelError::InvalidArgument("object id is empty"));
    }
    Ok(())
}

fn has_child(side: &Property, id: &str) -> Result<bool> {
    Ok(side.get(CHILDREN)?.contains(id)?)
}

impl<'a> ReflectedObjectBase<'a, &'a mut Property> {
    fn into_properties(self) -> Result<ReflectedItem<'a>> {
        self.into_base().into_typed_child(PROPERTIES, PropertyType::Dictionary)
    }

    /// The `properties` dictionary
    pub fn properties(&mut self) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_properties()
    }

    /// A named entry of `properties`, of any kind
    pub fn property(&mut self, name: &str) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_properties()?.into_child(name)
    }

    pub fn id(&mut self) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_properties()?.into_typed_child(ID, PropertyType::String)
    }

    pub fn current_state_id(&mut self) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_properties()?.into_typed_child(STATE, PropertyType::String)
    }

    pub fn enabled(&mut self) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_properties()?.into_typed_child(ENABLED, PropertyType::Bool)
    }

    /// Tags already present in the diff
    pub fn tags(&mut self) -> Result<ReflectedRangeMut<'_, ReflectedItem<'_>>> {
        self.reborrow().into_base().into_child_range(TAGS)
    }

    /// Append `tag` unless the current tag list already holds it
    pub fn add_tag(&mut self, tag: &str) -> Result<()> {
        let mut tags = self.get_array_item(TAGS)?;
        let len = tags.size()?;
        for index in (0..len).rev() {
            if tags.const_ref().get_item(index)? == tag {
                return Ok(());
            }
        }
        tags.get_item(len)?.set(tag);
        Ok(())
    }

    /// Remove every occurrence of `tag`; reports whether anything was removed
    pub fn remove_tag(&mut self, tag: &str) -> Result<bool> {
        let mut tags = self.get_array_item(TAGS)?;
        let initial = tags.size()?;
        for index in (0..initial).rev() {
            if tags.const_ref().get_item(index)? == tag {
                tags.remove_item(index)?;
            }
        }
        Ok(tags.size()? != initial)
    }

    /// The presentation `P`, stored at `properties.<P::ID>`
    pub fn presentation<'s, P>(&'s mut self) -> Result<P>
    where
        P: NamedPresentation + FromReflected<'s, &'s mut Property>,
    {
        self.reborrow().into_properties()?.into_custom_child(P::ID)
    }

    fn into_child_object(self, id: &str) -> Result<ReflectedObject<'a>> {
        check_id(id)?;
        let children = self.into_base().into_typed_child(CHILDREN, PropertyType::Dictionary)?;
        check_node(&children.const_ref().into_child(id)?)?;

        let mut child = ReflectedObject::from_item(children.into_child(id)?)?;
        child.id()?.set(id);
        Ok(child)
    }

    fn into_child_by_path(self, path: &PathId) -> Result<ReflectedObject<'a>> {
        if path.empty() {
            return Err(ModelError::InvalidArgument("object path is empty"));
        }
        let mut current = self;
        for id in path.segments() {
            current = current.into_child_object(id)?;
        }
        Ok(current)
    }

    /// Child `id`, created in the diff (with its id set) when missing
    pub fn child(&mut self, id: &str) -> Result<ReflectedObject<'_>> {
        self.reborrow().into_child_object(id)
    }

    /// Descendant reached by following `path` one [`child`](Self::child) at a time
    pub fn child_by_path(&mut self, path: impl Into<PathId>) -> Result<ReflectedObject<'_>> {
        self.reborrow().into_child_by_path(&path.into())
    }

    /// Tombstone child `id` in the diff
    pub fn remove_child(&mut self, id: &str) -> Result<()> {
        check_id(id)?;
        if has_child(self.origin_property(), id)? || has_child(self.diff_property(), id)? {
            log::debug!("Tombstoning child object {id:?}");
            self.get_dictionary_item(CHILDREN)?.into_child(id)?.clear();
        }
        Ok(())
    }

    /// Children already present in the diff
    pub fn children(&mut self) -> Result<ReflectedRangeMut<'_, ReflectedObject<'_>>> {
        self.reborrow().into_base().into_child_range(CHILDREN)
    }
}

impl<'a> ReflectedObjectBase<'a, &'a Property> {
    fn into_properties(self) -> Result<ConstReflectedItem<'a>> {
        self.into_base().into_typed_child(PROPERTIES, PropertyType::Dictionary)
    }

    pub fn properties(&self) -> Result<ConstReflectedItem<'a>> {
        self.into_properties()
    }

    pub fn property(&self, name: &str) -> Result<ConstReflectedItem<'a>> {
        self.into_properties()?.into_child(name)
    }

    pub fn id(&self) -> Result<ConstReflectedItem<'a>> {
        self.into_properties()?.into_typed_child(ID, PropertyType::String)
    }

    pub fn current_state_id(&self) -> Result<ConstReflectedItem<'a>> {
        self.into_properties()?.into_typed_child(STATE, PropertyType::String)
    }

    pub fn enabled(&self) -> Result<ConstReflectedItem<'a>> {
        self.into_properties()?.into_typed_child(ENABLED, PropertyType::Bool)
    }

    pub fn tags(&self) -> Result<ReflectedRange<'a, ConstReflectedItem<'a>>> {
        self.into_base().into_typed_child(TAGS, PropertyType::Array)?.range()
    }

    pub fn presentation<P>(&self) -> Result<P>
    where
        P: NamedPresentation + FromReflected<'a, &'a Property>,
    {
        self.into_properties()?.into_custom_child(P::ID)
    }

    /// Child `id`; missing and tombstoned children read as an empty object
    pub fn child(&self, id: &str) -> Result<ConstReflectedObject<'a>> {
        check_id(id)?;
        let children = self.into_base().into_typed_child(CHILDREN, PropertyType::Dictionary)?;
        if is_tombstone(children.diff_ref(), id) {
            return ConstReflectedObject::new(&NONE, &NONE);
        }
        ConstReflectedObject::from_item(children.into_child(id)?)
    }

    pub fn child_by_path(&self, path: impl Into<PathId>) -> Result<ConstReflectedObject<'a>> {
        let path = path.into();
        if path.empty() {
            return Err(ModelError::InvalidArgument("object path is empty"));
        }
        let mut current = *self;
        for id in path.segments() {
            current = current.child(id)?;
        }
        Ok(current)
    }

    /// Children of both sides; tombstoned ones are yielded empty
    pub fn children(&self) -> Result<ReflectedRange<'a, ConstReflectedObject<'a>>> {
        self.into_base().into_typed_child(CHILDREN, PropertyType::Dictionary)?.range()
    }
}
