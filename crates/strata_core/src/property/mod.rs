//! The dynamically-typed property tree
//!
//! A [`Property`] holds exactly one kind at a time: `none`, one of five
//! scalar kinds, a string, an index-keyed array or a key-keyed dictionary.
//! Numeric subkinds are distinct: an `Int` never compares equal to a `Long`
//! and reading a `Float` as a `Double` is a cast error.
//!
//! Mutable indexing auto-vivifies (`none` turns into the container kind and
//! missing slots are created as `none`), read-only indexing never mutates and
//! yields the shared [`NONE`] for missing slots.

mod index;
mod iter;
mod merge;
mod serde_impl;

pub use index::PropertyIndex;
pub use iter::{Iter, IterMut, PropertyKey};

use core::fmt;
use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{PropertyError, Result};
use crate::keystring::Keystring;

/// Index-keyed children; missing indices read as `none`
pub type Array = BTreeMap<usize, Property>;

/// Key-keyed children in insertion order
pub type Dictionary = IndexMap<Keystring, Property>;

/// Indices further than this past the end of an array are rejected
pub const MAX_ARRAY_STRIDE: usize = 0xff_ffff;

/// Shared read-only `none`, returned for missing children
pub static NONE: Property = Property::None;

/// The kind held by a [`Property`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    None,
    Bool,
    Int,
    Long,
    Float,
    Double,
    String,
    Array,
    Dictionary,
}

impl PropertyType {
    /// Lower-case name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Array => "array",
            Self::Dictionary => "dictionary",
        }
    }

    /// Check if the kind holds children
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Dictionary)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed tree value
#[derive(Debug, Clone, Default)]
pub enum Property {
    /// Absent value
    #[default]
    None,
    Bool(bool),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    String(Keystring),
    Array(Array),
    Dictionary(Dictionary),
}

macro_rules! scalar_accessors {
    ($($is:ident, $as:ident, $variant:ident, $ty:ty;)*) => {
        $(
            #[doc = concat!("Check if the value is `", stringify!($variant), "`")]
            #[inline]
            pub fn $is(&self) -> bool {
                matches!(self, Self::$variant(_))
            }

            #[doc = concat!("Read the `", stringify!($variant), "` value; any other kind is a cast error")]
            pub fn $as(&self) -> Result<$ty> {
                match self {
                    Self::$variant(value) => Ok(*value),
                    other => Err(PropertyError::cast(PropertyType::$variant, other.get_type())),
                }
            }
        )*
    };
}

impl Property {
    /// The shared `none` value
    #[inline]
    pub fn none_property() -> &'static Property {
        &NONE
    }

    /// Create an empty dictionary
    pub fn dictionary() -> Self {
        Self::Dictionary(Dictionary::new())
    }

    /// Create an empty array
    pub fn array() -> Self {
        Self::Array(Array::new())
    }

    /// The kind currently held
    pub fn get_type(&self) -> PropertyType {
        match self {
            Self::None => PropertyType::None,
            Self::Bool(_) => PropertyType::Bool,
            Self::Int(_) => PropertyType::Int,
            Self::Long(_) => PropertyType::Long,
            Self::Float(_) => PropertyType::Float,
            Self::Double(_) => PropertyType::Double,
            Self::String(_) => PropertyType::String,
            Self::Array(_) => PropertyType::Array,
            Self::Dictionary(_) => PropertyType::Dictionary,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[inline]
    pub fn is_dictionary(&self) -> bool {
        matches!(self, Self::Dictionary(_))
    }

    scalar_accessors! {
        is_bool, as_bool, Bool, bool;
        is_int, as_int, Int, i32;
        is_long, as_long, Long, i64;
        is_float, as_float, Float, f32;
        is_double, as_double, Double, f64;
    }

    /// Borrow the string content
    pub fn as_str(&self) -> Result<&str> {
        self.as_keystring().map(Keystring::as_str)
    }

    /// Copy the string content out
    pub fn as_string(&self) -> Result<String> {
        self.as_str().map(str::to_owned)
    }

    /// Borrow the string as a key
    pub fn as_keystring(&self) -> Result<&Keystring> {
        match self {
            Self::String(value) => Ok(value),
            other => Err(PropertyError::cast(PropertyType::String, other.get_type())),
        }
    }

    /// Borrow the array children
    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Self::Array(values) => Ok(values),
            other => Err(PropertyError::cast(PropertyType::Array, other.get_type())),
        }
    }

    /// Borrow the dictionary children
    pub fn as_dictionary(&self) -> Result<&Dictionary> {
        match self {
            Self::Dictionary(values) => Ok(values),
            other => Err(PropertyError::cast(PropertyType::Dictionary, other.get_type())),
        }
    }

    /// Number of direct children, or characters for a string
    pub fn size(&self) -> Result<usize> {
        match self {
            Self::None => Ok(0),
            Self::String(value) => Ok(value.chars().count()),
            Self::Array(values) => Ok(values.len()),
            Self::Dictionary(values) => Ok(values.len()),
            other => Err(PropertyError::cast_to("container or string", other.get_type())),
        }
    }

    /// Reset to `none`
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Move the value out, leaving `none` behind
    pub fn take(&mut self) -> Property {
        core::mem::take(self)
    }

    /// Read-only child access; missing children yield the shared `none`
    pub fn get<I: PropertyIndex>(&self, index: I) -> Result<&Property> {
        index.get_in(self)
    }

    /// Mutable child access, creating the container and the slot as needed
    pub fn get_or_create_mut<I: PropertyIndex>(&mut self, index: I) -> Result<&mut Property> {
        index.get_or_create_in(self)
    }

    /// Mutable access to an existing child only
    pub fn get_mut<I: PropertyIndex>(&mut self, index: I) -> Result<Option<&mut Property>> {
        index.find_in(self)
    }

    /// Assign a child, creating the container and the slot as needed
    pub fn set<I: PropertyIndex, V: Into<Property>>(&mut self, index: I, value: V) -> Result<()> {
        *self.get_or_create_mut(index)? = value.into();
        Ok(())
    }

    /// Remove a child; array elements after it move down by one
    pub fn remove<I: PropertyIndex>(&mut self, index: I) -> Result<Property> {
        index.remove_from(self)
    }

    /// Check whether a dictionary holds the key; `none` holds nothing
    pub fn contains(&self, key: &str) -> Result<bool> {
        match self {
            Self::None => Ok(false),
            Self::Dictionary(values) => Ok(values.contains_key(key)),
            other => Err(PropertyError::cast(PropertyType::Dictionary, other.get_type())),
        }
    }

    /// Iterate children; `none` yields an empty range
    pub fn iter(&self) -> Result<Iter<'_>> {
        Iter::new(self)
    }

    /// Iterate children mutably; `none` yields an empty range
    pub fn iter_mut(&mut self) -> Result<IterMut<'_>> {
        IterMut::new(self)
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Double(a), Self::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Dictionary(a), Self::Dictionary(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Property {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Property {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Property {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Property {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Property {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Property {
    fn from(v: &str) -> Self {
        Self::String(Keystring::from(v))
    }
}

impl From<String> for Property {
    fn from(v: String) -> Self {
        Self::String(Keystring::from(v))
    }
}

impl From<Keystring> for Property {
    fn from(v: Keystring) -> Self {
        Self::String(v)
    }
}

impl From<&Keystring> for Property {
    fn from(v: &Keystring) -> Self {
        Self::String(v.clone())
    }
}

impl From<Array> for Property {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Dictionary> for Property {
    fn from(v: Dictionary) -> Self {
        Self::Dictionary(v)
    }
}

impl<T: Into<Property>> From<Option<T>> for Property {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}

impl FromIterator<Property> for Property {
    /// Collects into a dense array
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self::Array(iter.into_iter().enumerate().collect())
    }
}

impl<K: Into<Keystring>> FromIterator<(K, Property)> for Property {
    /// Collects into a dictionary
    fn from_iter<I: IntoIterator<Item = (K, Property)>>(iter: I) -> Self {
        Self::Dictionary(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

macro_rules! try_from_property {
    ($($ty:ty => $as:ident;)*) => {
        $(
            impl TryFrom<&Property> for $ty {
                type Error = PropertyError;

                fn try_from(property: &Property) -> Result<Self> {
                    property.$as()
                }
            }
        )*
    };
}

try_from_property! {
    bool => as_bool;
    i32 => as_int;
    i64 => as_long;
    f32 => as_float;
    f64 => as_double;
    String => as_string;
}

impl TryFrom<&Property> for Keystring {
    type Error = PropertyError;

    fn try_from(property: &Property) -> Result<Self> {
        property.as_keystring().cloned()
    }
}
