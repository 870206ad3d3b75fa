//! Origin/diff overlay over a single tree node
//!
//! A [`ReflectedItemBase`] pairs a read-only origin node with a diff node.
//! Reads prefer the diff when it holds a value and fall back to the origin;
//! writes always land in the diff. The diff side is either `&mut Property`
//! ([`ReflectedItem`]) or `&Property` ([`ConstReflectedItem`]).
//!
//! Mutable child access vivifies the diff path down to the child, read-only
//! access never touches either tree.

use core::ops::Deref;

use strata_core::{Keystring, Property, PropertyError, PropertyIndex, PropertyType, NONE};

use crate::error::{ModelError, Result};

/// Overlay view over an origin node and a diff node
#[derive(Debug, Clone, Copy)]
pub struct ReflectedItemBase<'a, D> {
    pub(crate) orig: &'a Property,
    pub(crate) diff: D,
}

/// Overlay whose diff side is writable
pub type ReflectedItem<'a> = ReflectedItemBase<'a, &'a mut Property>;

/// Overlay with both sides read-only
pub type ConstReflectedItem<'a> = ReflectedItemBase<'a, &'a Property>;

/// Construction of a typed view from a raw overlay
///
/// Implementations validate the pair (and, for writable typed events, stamp
/// their discriminators into the diff).
pub trait FromReflected<'a, D>: Sized {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self>;
}

impl<'a, D> FromReflected<'a, D> for ReflectedItemBase<'a, D> {
    fn from_item(item: ReflectedItemBase<'a, D>) -> Result<Self> {
        Ok(item)
    }
}

/// Origin side of a child; indices past the origin's reach read as `none`
pub(crate) fn origin_child<'a, I: PropertyIndex>(orig: &'a Property, key: &I) -> Result<&'a Property> {
    match key.get_in(orig) {
        Err(PropertyError::InvalidArgument(_)) => Ok(&NONE),
        other => Ok(other?),
    }
}

impl<'a, D> ReflectedItemBase<'a, D> {
    /// Pair an origin node with a diff node
    pub fn new(orig: &'a Property, diff: D) -> Self {
        Self { orig, diff }
    }

    /// Convert into a typed view
    pub fn cast<T: FromReflected<'a, D>>(self) -> Result<T> {
        T::from_item(self)
    }

    /// Identity conversion shared with the typed views
    pub fn into_base(self) -> Self {
        self
    }
}

macro_rules! scalar_reads {
    ($($is:ident, $as:ident, $ty:ty;)*) => {
        $(
            pub fn $is(&self) -> bool {
                self.current().$is()
            }

            pub fn $as(&self) -> Result<$ty> {
                Ok(self.current().$as()?)
            }
        )*
    };
}

impl<'a, D: Deref<Target = Property>> ReflectedItemBase<'a, D> {
    /// The value reads resolve to: the diff when set, otherwise the origin
    pub fn current(&self) -> &Property {
        if self.diff.is_none() {
            self.orig
        } else {
            &*self.diff
        }
    }

    /// The origin node
    pub fn origin_property(&self) -> &'a Property {
        self.orig
    }

    /// The diff node
    pub fn diff_property(&self) -> &Property {
        &*self.diff
    }

    /// Neither side holds a value
    pub fn is_none(&self) -> bool {
        self.diff.is_none() && self.orig.is_none()
    }

    /// The diff holds a value
    pub fn has_changes(&self) -> bool {
        !self.diff.is_none()
    }

    /// The origin holds a value
    pub fn has_origin(&self) -> bool {
        !self.orig.is_none()
    }

    /// The diff differs from the origin
    pub fn is_changed(&self) -> bool {
        *self.diff != *self.orig
    }

    scalar_reads! {
        is_bool, as_bool, bool;
        is_int, as_int, i32;
        is_long, as_long, i64;
        is_float, as_float, f32;
        is_double, as_double, f64;
    }

    pub fn is_string(&self) -> bool {
        self.current().is_string()
    }

    pub fn as_string(&self) -> Result<String> {
        Ok(self.current().as_string()?)
    }

    pub fn as_keystring(&self) -> Result<Keystring> {
        Ok(self.current().as_keystring()?.clone())
    }

    pub fn is_dictionary(&self) -> bool {
        self.current().is_dictionary()
    }

    pub fn is_array(&self) -> bool {
        self.current().is_array()
    }

    /// Size of the resolved value
    pub fn size(&self) -> Result<usize> {
        Ok(self.current().size()?)
    }

    /// Keys of the resolved dictionary; `none` has no members
    pub fn get_members(&self) -> Result<Vec<Keystring>> {
        match self.current() {
            Property::None => Ok(Vec::new()),
            Property::Dictionary(values) => Ok(values.keys().cloned().collect()),
            other => Err(ModelError::unexpected(PropertyType::Dictionary.name(), other.get_type())),
        }
    }

    /// Fail unless the resolved value is `none` or of `kind`
    pub fn expect_kind(&self, kind: PropertyType) -> Result<()> {
        let found = self.current().get_type();
        if found == PropertyType::None || found == kind {
            Ok(())
        } else {
            Err(ModelError::unexpected(kind.name(), found))
        }
    }

    /// Read-only view over the same pair
    pub fn const_ref(&self) -> ConstReflectedItem<'_> {
        ReflectedItemBase {
            orig: self.orig,
            diff: &*self.diff,
        }
    }

    /// Read-only view over the origin alone
    pub fn origin(&self) -> ConstReflectedItem<'a> {
        ReflectedItemBase { orig: self.orig, diff: &NONE }
    }
}

impl<'a> ReflectedItemBase<'a, &'a mut Property> {
    /// Shorter-lived writable view over the same pair
    pub fn reborrow(&mut self) -> ReflectedItem<'_> {
        ReflectedItemBase {
            orig: self.orig,
            diff: &mut *self.diff,
        }
    }

    /// Read-only view keeping the full lifetime
    pub fn into_const(self) -> ConstReflectedItem<'a> {
        ReflectedItemBase {
            orig: self.orig,
            diff: self.diff,
        }
    }

    /// Mutable diff node
    pub fn diff_mut(&mut self) -> &mut Property {
        &mut *self.diff
    }

    /// Overwrite the diff with `value`
    pub fn set<V: Into<Property>>(&mut self, value: V) {
        *self.diff = value.into();
    }

    /// Drop pending changes of this node
    pub fn clear(&mut self) {
        self.diff.clear();
    }

    /// Consume the view and descend into a child, vivifying the diff path
    pub fn into_child<I: PropertyIndex>(self, key: I) -> Result<ReflectedItem<'a>> {
        let orig = origin_child(self.orig, &key)?;
        let diff = self.diff.get_or_create_mut(&key)?;
        Ok(ReflectedItemBase { orig, diff })
    }

    /// Like [`into_child`](Self::into_child), failing first when the child
    /// resolves to neither `none` nor `kind`
    pub fn into_typed_child<I: PropertyIndex>(self, key: I, kind: PropertyType) -> Result<ReflectedItem<'a>> {
        self.const_ref().get_item(&key)?.expect_kind(kind)?;
        self.into_child(key)
    }

    /// Consume the view and descend into a child as a typed view
    pub fn into_custom_child<T, I>(self, key: I) -> Result<T>
    where
        T: FromReflected<'a, &'a mut Property>,
        I: PropertyIndex,
    {
        T::from_item(self.into_child(key)?)
    }

    /// Child view, vivifying the diff path
    pub fn get_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_child(key)
    }

    pub fn get_bool_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Bool)
    }

    pub fn get_int_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Int)
    }

    pub fn get_long_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Long)
    }

    pub fn get_float_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Float)
    }

    pub fn get_double_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Double)
    }

    pub fn get_string_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::String)
    }

    pub fn get_dictionary_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Dictionary)
    }

    pub fn get_array_item<I: PropertyIndex>(&mut self, key: I) -> Result<ReflectedItem<'_>> {
        self.reborrow().into_typed_child(key, PropertyType::Array)
    }

    /// Child as a typed view
    pub fn get_custom_item<'s, T, I>(&'s mut self, key: I) -> Result<T>
    where
        T: FromReflected<'s, &'s mut Property>,
        I: PropertyIndex,
    {
        self.reborrow().into_custom_child(key)
    }

    /// Remove a child from the resolved container
    ///
    /// An untouched diff first receives a copy of the origin container, so
    /// the removal is visible through this view even for children that only
    /// exist in the origin. Later removals work on the diff alone.
    pub fn remove_item<I: PropertyIndex>(&mut self, key: I) -> Result<Property> {
        let kind = key.container_type();
        let found = self.current().get_type();
        if found != kind {
            return Err(ModelError::unexpected(kind.name(), found));
        }
        if self.diff.is_none() {
            *self.diff = self.orig.clone();
        }
        Ok(self.diff.remove(key)?)
    }
}

impl<'a> ReflectedItemBase<'a, &'a Property> {
    /// The diff node with the full lifetime
    pub fn diff_ref(&self) -> &'a Property {
        self.diff
    }

    /// Consume the view and descend into a child
    pub fn into_child<I: PropertyIndex>(self, key: I) -> Result<ConstReflectedItem<'a>> {
        Ok(ReflectedItemBase {
            orig: origin_child(self.orig, &key)?,
            diff: key.get_in(self.diff)?,
        })
    }

    /// Like [`into_child`](Self::into_child), failing when the child
    /// resolves to neither `none` nor `kind`
    pub fn into_typed_child<I: PropertyIndex>(self, key: I, kind: PropertyType) -> Result<ConstReflectedItem<'a>> {
        let item = self.into_child(key)?;
        item.expect_kind(kind)?;
        Ok(item)
    }

    /// Consume the view and descend into a child as a typed view
    pub fn into_custom_child<T, I>(self, key: I) -> Result<T>
    where
        T: FromReflected<'a, &'a Property>,
        I: PropertyIndex,
    {
        T::from_item(self.into_child(key)?)
    }

    /// Child view; nothing is created
    pub fn get_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_child(key)
    }

    pub fn get_bool_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Bool)
    }

    pub fn get_int_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Int)
    }

    pub fn get_long_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Long)
    }

    pub fn get_float_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Float)
    }

    pub fn get_double_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Double)
    }

    pub fn get_string_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::String)
    }

    pub fn get_dictionary_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Dictionary)
    }

    pub fn get_array_item<I: PropertyIndex>(&self, key: I) -> Result<ConstReflectedItem<'a>> {
        self.into_typed_child(key, PropertyType::Array)
    }

    /// Child as a typed view
    pub fn get_custom_item<T, I>(&self, key: I) -> Result<T>
    where
        T: FromReflected<'a, &'a Property>,
        I: PropertyIndex,
    {
        self.into_custom_child(key)
    }
}

macro_rules! eq_scalar {
    ($($ty:ty => $variant:ident;)*) => {
        $(
            impl<'a, D: Deref<Target = Property>> PartialEq<$ty> for ReflectedItemBase<'a, D> {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self.current(), Property::$variant(value) if value == other)
                }
            }
        )*
    };
}

eq_scalar! {
    bool => Bool;
    i32 => Int;
    i64 => Long;
    f32 => Float;
    f64 => Double;
    str => String;
    &str => String;
    String => String;
    Keystring => String;
}

/// Declare a typed view wrapping `$base`
///
/// The view derefs to its base, offers `const_ref`, `origin`, `reborrow` and
/// `into_base`, and a validating `new` when it implements [`FromReflected`].
macro_rules! reflected_view {
    ($(#[$meta:meta])* $name:ident : $base:ident, $mutable:ident, $constant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a, D> {
            inner: $base<'a, D>,
        }

        pub type $mutable<'a> = $name<'a, &'a mut ::strata_core::Property>;
        pub type $constant<'a> = $name<'a, &'a ::strata_core::Property>;

        impl<'a, D> ::core::ops::Deref for $name<'a, D> {
            type Target = $base<'a, D>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl<'a, D> ::core::ops::DerefMut for $name<'a, D> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.inner
            }
        }

        impl<'a, D> $name<'a, D>
        where
            Self: $crate::item::FromReflected<'a, D>,
        {
            /// Validating constructor over an origin/diff pair
            pub fn new(orig: &'a ::strata_core::Property, diff: D) -> $crate::error::Result<Self> {
                <Self as $crate::item::FromReflected<'a, D>>::from_item(
                    $crate::item::ReflectedItemBase::new(orig, diff),
                )
            }
        }

        impl<'a, D> $name<'a, D> {
            /// Unwrap down to the raw overlay
            pub fn into_base(self) -> $crate::item::ReflectedItemBase<'a, D> {
                self.inner.into_base()
            }

            /// Reinterpret the pair as another typed view
            pub fn cast<T: $crate::item::FromReflected<'a, D>>(self) -> $crate::error::Result<T> {
                T::from_item(self.into_base())
            }
        }

        impl<'a, D: ::core::ops::Deref<Target = ::strata_core::Property>> $name<'a, D> {
            /// Read-only view over the same pair
            pub fn const_ref(&self) -> $name<'_, &'_ ::strata_core::Property> {
                $name {
                    inner: self.inner.const_ref(),
                }
            }

            /// Read-only view over the origin alone
            pub fn origin(&self) -> $name<'a, &'a ::strata_core::Property> {
                $name {
                    inner: self.inner.origin(),
                }
            }
        }

        impl<'a> $name<'a, &'a mut ::strata_core::Property> {
            /// Shorter-lived writable view over the same pair
            pub fn reborrow(&mut self) -> $name<'_, &'_ mut ::strata_core::Property> {
                $name {
                    inner: self.inner.reborrow(),
                }
            }
        }
    };
}

/// Declare leaf accessors reading `key` with a kind check
///
/// Each accessor exists twice: writable views vivify the leaf in the diff,
/// read-only views return a view with the full lifetime.
macro_rules! leaf_items {
    ($view:ident { $($(#[$meta:meta])* $name:ident => $key:literal : $kind:ident,)* }) => {
        impl<'a> $view<'a, &'a mut ::strata_core::Property> {
            $(
                $(#[$meta])*
                pub fn $name(&mut self) -> $crate::error::Result<$crate::item::ReflectedItem<'_>> {
                    self.reborrow()
                        .into_base()
                        .into_typed_child($key, ::strata_core::PropertyType::$kind)
                }
            )*
        }

        impl<'a> $view<'a, &'a ::strata_core::Property> {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> $crate::error::Result<$crate::item::ConstReflectedItem<'a>> {
                    self.into_base()
                        .into_typed_child($key, ::strata_core::PropertyType::$kind)
                }
            )*
        }
    };
}

pub(crate) use leaf_items;
pub(crate) use reflected_view;

/// Accept only `none` or dictionary nodes on both sides
pub(crate) fn check_node<D: Deref<Target = Property>>(item: &ReflectedItemBase<'_, D>) -> Result<()> {
    for side in [item.orig, &*item.diff] {
        match side.get_type() {
            PropertyType::None | PropertyType::Dictionary => {}
            found => return Err(ModelError::unexpected(PropertyType::Dictionary.name(), found)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_origin() -> Property {
        let mut orig = Property::None;
        let mut edit = ReflectedItem::new(&NONE, &mut orig);
        edit.get_int_item("asd").unwrap().set(15);
        edit.get_string_item("qwe").unwrap().set("zxc");
        orig
    }

    #[test]
    fn test_empty_item() {
        let orig = Property::None;
        let diff = Property::None;
        let item = ConstReflectedItem::new(&orig, &diff);

        assert!(item.is_none());
        assert!(!item.is_bool());
        assert!(!item.has_origin());
        assert!(!item.has_changes());
        assert!(!item.is_changed());
        assert_eq!(item.size().unwrap(), 0);
        assert!(item.as_bool().is_err());
        assert!(item.as_string().is_err());
        assert!(item != 2i32);
        assert!(item != "key");
    }

    #[test]
    fn test_reads_fall_back_to_origin() {
        let orig = filled_origin();
        let mut diff = Property::None;
        let item = ReflectedItem::new(&orig, &mut diff);

        assert!(item.has_origin());
        assert!(!item.has_changes());
        assert!(item.is_changed());
        let view = item.const_ref();
        assert!(view.get_int_item("asd").unwrap() == 15i32);
        assert!(view.get_string_item("qwe").unwrap() == "zxc");
    }

    #[test]
    fn test_writes_land_in_diff() {
        let orig = filled_origin();
        let mut diff = Property::None;
        let mut item = ReflectedItem::new(&orig, &mut diff);

        item.get_item("asd").unwrap().set("rty");
        assert!(item.has_changes());
        assert!(item.origin().get_int_item("asd").unwrap() == 15i32);
        assert!(item.const_ref().get_string_item("asd").unwrap() == "rty");
        assert!(item.const_ref().get_string_item("qwe").unwrap() == "zxc");
        assert!(item.get_int_item("asd").unwrap_err().is_unexpected_item_type());

        let mut expected = Property::None;
        expected.set("asd", "rty").unwrap();
        assert_eq!(diff, expected);
        assert_eq!(orig, filled_origin());
    }

    #[test]
    fn test_scalar_kinds_in_diff() {
        let orig = Property::None;
        let cases = [
            (Property::from(true), PropertyType::Bool),
            (Property::from(7), PropertyType::Int),
            (Property::from(i64::MAX), PropertyType::Long),
            (Property::from(0.123f32), PropertyType::Float),
            (Property::from(f64::MAX), PropertyType::Double),
        ];
        for (value, kind) in cases {
            let item = ConstReflectedItem::new(&orig, &value);
            assert_eq!(item.current().get_type(), kind);
            assert!(item.is_changed());
            assert!(item.size().is_err());
        }

        assert!(ConstReflectedItem::new(&orig, &Property::from(7)) == 7i32);
        assert!(ConstReflectedItem::new(&orig, &Property::from(7)) != 7i64);
        assert_eq!(ConstReflectedItem::new(&orig, &Property::from(i64::MAX)).as_long().unwrap(), i64::MAX);

        let string = Property::from("qwe");
        let item = ConstReflectedItem::new(&orig, &string);
        assert_eq!(item.as_string().unwrap(), "qwe");
        assert_eq!(item.as_keystring().unwrap().c_str(), "qwe");
        assert_eq!(item.size().unwrap(), 3);
    }

    #[test]
    fn test_typed_items_check_kind() {
        let orig = Property::None;
        let mut diff = Property::None;
        diff.set("1", Property::None).unwrap();
        diff.set("2", true).unwrap();
        diff.set("3", 15).unwrap();
        diff.set("4", "asd").unwrap();
        diff.get_or_create_mut("5").unwrap().set("6", 123).unwrap();
        diff.get_or_create_mut("7").unwrap().set(2usize, 42).unwrap();
        diff.set("8", 146i64).unwrap();
        diff.set("9", 732.0f32).unwrap();
        diff.set("a", 5.0).unwrap();

        let item = ConstReflectedItem::new(&orig, &diff);
        assert!(item.is_dictionary());
        assert_eq!(item.size().unwrap(), 9);

        assert!(item.get_bool_item("1").unwrap().is_none());
        assert!(item.get_bool_item("2").unwrap() == true);
        assert!(item.get_int_item("3").unwrap() == 15i32);
        assert!(item.get_string_item("4").unwrap() == "asd");
        assert!(item.get_dictionary_item("5").unwrap().get_int_item("6").unwrap() == 123i32);
        assert_eq!(item.get_array_item("7").unwrap().size().unwrap(), 3);
        assert!(item.get_long_item("8").unwrap() == 146i64);
        assert!(item.get_float_item("9").unwrap() == 732.0f32);
        assert!(item.get_double_item("a").unwrap() == 5.0f64);

        assert!(item.get_int_item("2").unwrap_err().is_unexpected_item_type());
        assert!(item.get_long_item("3").unwrap_err().is_unexpected_item_type());
        assert!(item.get_double_item("9").unwrap_err().is_unexpected_item_type());
        assert!(item.get_array_item("5").unwrap_err().is_unexpected_item_type());
    }

    #[test]
    fn test_failed_typed_access_does_not_vivify() {
        let orig = Property::None;
        let mut diff = Property::None;
        diff.set("n", 1).unwrap();
        let before = diff.clone();

        let mut item = ReflectedItem::new(&orig, &mut diff);
        assert!(item.get_string_item("n").is_err());
        assert_eq!(diff, before);
    }

    #[test]
    fn test_members() {
        let orig = filled_origin();
        let mut diff = Property::None;
        let item = ReflectedItem::new(&orig, &mut diff);

        let members = item.get_members().unwrap();
        assert_eq!(members, vec![Keystring::from("asd"), Keystring::from("qwe")]);

        let scalar = Property::from(1);
        assert!(ConstReflectedItem::new(&scalar, &NONE)
            .get_members()
            .unwrap_err()
            .is_unexpected_item_type());
    }

    #[test]
    fn test_remove_item_copies_origin() {
        let orig = filled_origin();
        let mut diff = Property::None;
        let mut item = ReflectedItem::new(&orig, &mut diff);

        assert_eq!(item.remove_item("asd").unwrap(), Property::from(15));
        assert_eq!(item.get_members().unwrap(), vec![Keystring::from("qwe")]);
        assert!(matches!(
            item.remove_item("asd"),
            Err(ModelError::Property(PropertyError::OutOfRange))
        ));
        assert!(item.remove_item(0usize).unwrap_err().is_unexpected_item_type());
    }

    #[test]
    fn test_remove_twice_from_origin_dictionary() {
        let orig = filled_origin();
        let mut diff = Property::None;
        let mut item = ReflectedItem::new(&orig, &mut diff);

        assert_eq!(item.remove_item("asd").unwrap(), Property::from(15));
        assert_eq!(item.remove_item("qwe").unwrap(), Property::from("zxc"));
        assert!(item.get_members().unwrap().is_empty());
        assert_eq!(item.size().unwrap(), 0);
        assert!(matches!(
            item.remove_item("asd"),
            Err(ModelError::Property(PropertyError::OutOfRange))
        ));
        assert_eq!(orig.size().unwrap(), 2);
    }

    #[test]
    fn test_remove_twice_from_origin_array() {
        let orig: Property = ["a", "b", "c", "d"].into_iter().map(Property::from).collect();
        let mut diff = Property::None;
        let mut item = ReflectedItem::new(&orig, &mut diff);

        assert_eq!(item.remove_item(0usize).unwrap(), Property::from("a"));
        assert_eq!(item.remove_item(1usize).unwrap(), Property::from("c"));

        let view = item.const_ref();
        assert_eq!(view.size().unwrap(), 2);
        assert!(view.get_item(0usize).unwrap() == "b");
        assert!(view.get_item(1usize).unwrap() == "d");
        let values: Vec<String> = view
            .range::<ConstReflectedItem<'_>>()
            .unwrap()
            .map(|entry| entry.unwrap().1.as_string().unwrap())
            .collect();
        assert_eq!(values, vec!["b", "d"]);
    }

    #[test]
    fn test_remove_from_touched_array_uses_diff() {
        let mut orig = Property::None;
        for (index, tag) in ["a", "b"].into_iter().enumerate() {
            orig.set(index, tag).unwrap();
        }
        let mut diff = Property::None;
        let mut item = ReflectedItem::new(&orig, &mut diff);
        item.get_item(1usize).unwrap().set("x");
        item.get_item(2usize).unwrap().set("c");

        assert_eq!(item.remove_item(1usize).unwrap(), Property::from("x"));
        let view = item.const_ref();
        assert_eq!(view.size().unwrap(), 2);
        assert!(view.diff_property().get(0usize).unwrap().is_none());
        assert!(view.get_item(0usize).unwrap() == "a");
        assert!(view.get_item(1usize).unwrap() == "c");
    }


    #[test]
    fn test_clear_drops_changes() {
        let orig = Property::from(1);
        let mut diff = Property::from(2);
        let mut item = ReflectedItem::new(&orig, &mut diff);

        assert!(item == 2i32);
        item.clear();
        assert!(!item.has_changes());
        assert!(item == 1i32);
    }
}
