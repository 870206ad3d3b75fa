//! Keyed and indexed child access

use crate::error::{PropertyError, Result};
use crate::keystring::Keystring;

use super::{Array, Dictionary, Property, PropertyType, MAX_ARRAY_STRIDE, NONE};

/// A key (for dictionaries) or an index (for arrays) into a [`Property`]
pub trait PropertyIndex {
    /// The container kind this index addresses
    fn container_type(&self) -> PropertyType;

    /// Read-only lookup; missing children resolve to the shared `none`
    fn get_in<'p>(&self, property: &'p Property) -> Result<&'p Property>;

    /// Mutable lookup, vivifying the container and the slot
    fn get_or_create_in<'p>(&self, property: &'p mut Property) -> Result<&'p mut Property>;

    /// Mutable lookup of an existing child
    fn find_in<'p>(&self, property: &'p mut Property) -> Result<Option<&'p mut Property>>;

    /// Remove the child and return it
    fn remove_from(&self, property: &mut Property) -> Result<Property>;
}

impl<T: PropertyIndex + ?Sized> PropertyIndex for &T {
    fn container_type(&self) -> PropertyType {
        (**self).container_type()
    }

    fn get_in<'p>(&self, property: &'p Property) -> Result<&'p Property> {
        (**self).get_in(property)
    }

    fn get_or_create_in<'p>(&self, property: &'p mut Property) -> Result<&'p mut Property> {
        (**self).get_or_create_in(property)
    }

    fn find_in<'p>(&self, property: &'p mut Property) -> Result<Option<&'p mut Property>> {
        (**self).find_in(property)
    }

    fn remove_from(&self, property: &mut Property) -> Result<Property> {
        (**self).remove_from(property)
    }
}

fn check_stride(index: usize, values: &Array) -> Result<()> {
    if index > values.len().saturating_add(MAX_ARRAY_STRIDE) {
        return Err(PropertyError::InvalidArgument(format!(
            "array index {index} is too far past the end ({})",
            values.len()
        )));
    }
    Ok(())
}

fn fill_gaps(values: &mut Array, index: usize) {
    let dense = values.keys().next_back().map_or(true, |last| last + 1 == values.len());
    if dense {
        for slot in values.len()..index {
            values.insert(slot, Property::None);
        }
    } else {
        for slot in 0..index {
            values.entry(slot).or_default();
        }
    }
}

impl PropertyIndex for usize {
    fn container_type(&self) -> PropertyType {
        PropertyType::Array
    }

    fn get_in<'p>(&self, property: &'p Property) -> Result<&'p Property> {
        match property {
            Property::None => Ok(&NONE),
            Property::Array(values) => {
                check_stride(*self, values)?;
                Ok(values.get(self).unwrap_or(&NONE))
            }
            other => Err(PropertyError::cast(PropertyType::Array, other.get_type())),
        }
    }

    fn get_or_create_in<'p>(&self, property: &'p mut Property) -> Result<&'p mut Property> {
        if property.is_none() {
            *property = Property::array();
        }
        match property {
            Property::Array(values) => {
                check_stride(*self, values)?;
                fill_gaps(values, *self);
                Ok(values.entry(*self).or_default())
            }
            other => Err(PropertyError::cast(PropertyType::Array, other.get_type())),
        }
    }

    fn find_in<'p>(&self, property: &'p mut Property) -> Result<Option<&'p mut Property>> {
        match property {
            Property::None => Ok(None),
            Property::Array(values) => Ok(values.get_mut(self)),
            other => Err(PropertyError::cast(PropertyType::Array, other.get_type())),
        }
    }

    fn remove_from(&self, property: &mut Property) -> Result<Property> {
        let values = match property {
            Property::Array(values) => values,
            other => return Err(PropertyError::cast(PropertyType::Array, other.get_type())),
        };
        let removed = values.remove(self).ok_or(PropertyError::OutOfRange)?;
        let tail = values.split_off(self);
        values.extend(tail.into_iter().map(|(index, value)| (index - 1, value)));
        Ok(removed)
    }
}

fn dictionary_get<'p>(key: &str, property: &'p Property) -> Result<&'p Property> {
    match property {
        Property::None => Ok(&NONE),
        Property::Dictionary(values) => Ok(values.get(key).unwrap_or(&NONE)),
        other => Err(PropertyError::cast(PropertyType::Dictionary, other.get_type())),
    }
}

fn dictionary_slot<'p>(key: Keystring, values: &'p mut Dictionary) -> &'p mut Property {
    let slot = match values.get_index_of(key.as_str()) {
        Some(slot) => slot,
        None => values.insert_full(key, Property::None).0,
    };
    &mut values[slot]
}

fn dictionary_get_or_create<'p>(
    key: impl FnOnce() -> Keystring,
    property: &'p mut Property,
) -> Result<&'p mut Property> {
    if property.is_none() {
        *property = Property::dictionary();
    }
    match property {
        Property::Dictionary(values) => Ok(dictionary_slot(key(), values)),
        other => Err(PropertyError::cast(PropertyType::Dictionary, other.get_type())),
    }
}

fn dictionary_find<'p>(key: &str, property: &'p mut Property) -> Result<Option<&'p mut Property>> {
    match property {
        Property::None => Ok(None),
        Property::Dictionary(values) => Ok(values.get_mut(key)),
        other => Err(PropertyError::cast(PropertyType::Dictionary, other.get_type())),
    }
}

fn dictionary_remove(key: &str, property: &mut Property) -> Result<Property> {
    match property {
        Property::Dictionary(values) => values.shift_remove(key).ok_or(PropertyError::OutOfRange),
        other => Err(PropertyError::cast(PropertyType::Dictionary, other.get_type())),
    }
}

impl PropertyIndex for Keystring {
    fn container_type(&self) -> PropertyType {
        PropertyType::Dictionary
    }

    fn get_in<'p>(&self, property: &'p Property) -> Result<&'p Property> {
        dictionary_get(self, property)
    }

    fn get_or_create_in<'p>(&self, property: &'p mut Property) -> Result<&'p mut Property> {
        dictionary_get_or_create(|| self.clone(), property)
    }

    fn find_in<'p>(&self, property: &'p mut Property) -> Result<Option<&'p mut Property>> {
        dictionary_find(self, property)
    }

    fn remove_from(&self, property: &mut Property) -> Result<Property> {
        dictionary_remove(self, property)
    }
}

impl PropertyIndex for str {
    fn container_type(&self) -> PropertyType {
        PropertyType::Dictionary
    }

    fn get_in<'p>(&self, property: &'p Property) -> Result<&'p Property> {
        dictionary_get(self, property)
    }

    fn get_or_create_in<'p>(&self, property: &'p mut Property) -> Result<&'p mut Property> {
        dictionary_get_or_create(|| Keystring::from(self), property)
    }

    fn find_in<'p>(&self, property: &'p mut Property) -> Result<Option<&'p mut Property>> {
        dictionary_find(self, property)
    }

    fn remove_from(&self, property: &mut Property) -> Result<Property> {
        dictionary_remove(self, property)
    }
}

impl PropertyIndex for String {
    fn container_type(&self) -> PropertyType {
        PropertyType::Dictionary
    }

    fn get_in<'p>(&self, property: &'p Property) -> Result<&'p Property> {
        self.as_str().get_in(property)
    }

    fn get_or_create_in<'p>(&self, property: &'p mut Property) -> Result<&'p mut Property> {
        self.as_str().get_or_create_in(property)
    }

    fn find_in<'p>(&self, property: &'p mut Property) -> Result<Option<&'p mut Property>> {
        self.as_str().find_in(property)
    }

    fn remove_from(&self, property: &mut Property) -> Result<Property> {
        self.as_str().remove_from(property)
    }
}
