//! Iteration over container children

use std::collections::btree_map;

use indexmap::map as index_map;

use crate::error::{PropertyError, Result};
use crate::keystring::Keystring;

use super::Property;

/// Position of an iterated child: an array index or a dictionary key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKey<'a> {
    Index(usize),
    Key(&'a Keystring),
}

impl<'a> PropertyKey<'a> {
    /// The dictionary key; array entries fail with an iterator-type error
    pub fn key(&self) -> Result<&'a Keystring> {
        match *self {
            Self::Key(key) => Ok(key),
            Self::Index(_) => Err(PropertyError::IteratorType("key")),
        }
    }

    /// The array index; dictionary entries fail with an iterator-type error
    pub fn index(&self) -> Result<usize> {
        match *self {
            Self::Index(index) => Ok(index),
            Self::Key(_) => Err(PropertyError::IteratorType("index")),
        }
    }
}

enum Inner<A, D> {
    Empty,
    Array(A),
    Dictionary(D),
}

/// Borrowing iterator over the children of a [`Property`]
pub struct Iter<'a> {
    inner: Inner<btree_map::Iter<'a, usize, Property>, index_map::Iter<'a, Keystring, Property>>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(property: &'a Property) -> Result<Self> {
        let inner = match property {
            Property::None => Inner::Empty,
            Property::Array(values) => Inner::Array(values.iter()),
            Property::Dictionary(values) => Inner::Dictionary(values.iter()),
            other => return Err(PropertyError::cast_to("container", other.get_type())),
        };
        Ok(Self { inner })
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (PropertyKey<'a>, &'a Property);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Empty => None,
            Inner::Array(it) => it.next().map(|(i, v)| (PropertyKey::Index(*i), v)),
            Inner::Dictionary(it) => it.next().map(|(k, v)| (PropertyKey::Key(k), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Empty => (0, Some(0)),
            Inner::Array(it) => it.size_hint(),
            Inner::Dictionary(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Mutable iterator over the children of a [`Property`]
pub struct IterMut<'a> {
    inner: Inner<btree_map::IterMut<'a, usize, Property>, index_map::IterMut<'a, Keystring, Property>>,
}

impl<'a> IterMut<'a> {
    pub(super) fn new(property: &'a mut Property) -> Result<Self> {
        let inner = match property {
            Property::None => Inner::Empty,
            Property::Array(values) => Inner::Array(values.iter_mut()),
            Property::Dictionary(values) => Inner::Dictionary(values.iter_mut()),
            other => return Err(PropertyError::cast_to("container", other.get_type())),
        };
        Ok(Self { inner })
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (PropertyKey<'a>, &'a mut Property);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Empty => None,
            Inner::Array(it) => it.next().map(|(i, v)| (PropertyKey::Index(*i), v)),
            Inner::Dictionary(it) => it.next().map(|(k, v)| (PropertyKey::Key(k), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Empty => (0, Some(0)),
            Inner::Array(it) => it.size_hint(),
            Inner::Dictionary(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for IterMut<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_iterates_empty() {
        assert_eq!(Property::None.iter().unwrap().count(), 0);
    }

    #[test]
    fn test_scalar_iteration_fails() {
        assert!(Property::from(1).iter().err().is_some_and(|e| e.is_cast()));
        assert!(Property::from("s").iter().err().is_some_and(|e| e.is_cast()));
    }

    #[test]
    fn test_array_iterates_by_ascending_index() {
        let mut p = Property::None;
        p.set(2usize, "c").unwrap();
        p.set(0usize, "a").unwrap();

        let entries: Vec<(usize, &Property)> = p
            .iter()
            .unwrap()
            .map(|(key, value)| (key.index().unwrap(), value))
            .collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], (0, &Property::from("a")));
        assert!(entries[1].1.is_none());
        assert_eq!(entries[2], (2, &Property::from("c")));
    }

    #[test]
    fn test_entry_kind_mismatch() {
        let mut dict = Property::None;
        dict.set("k", 1).unwrap();
        let (key, _) = dict.iter().unwrap().next().unwrap();
        assert_eq!(key.key().unwrap(), "k");
        assert_eq!(key.index(), Err(PropertyError::IteratorType("index")));

        let mut array = Property::None;
        array.set(0usize, 1).unwrap();
        let (key, _) = array.iter().unwrap().next().unwrap();
        assert_eq!(key.index().unwrap(), 0);
        assert_eq!(key.key(), Err(PropertyError::IteratorType("key")));
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut p = Property::None;
        p.set("a", 1).unwrap();
        p.set("b", 2).unwrap();

        for (_, value) in p.iter_mut().unwrap() {
            let doubled = value.as_int().unwrap() * 2;
            *value = Property::from(doubled);
        }
        assert_eq!(p.get("a").unwrap().as_int().unwrap(), 2);
        assert_eq!(p.get("b").unwrap().as_int().unwrap(), 4);
    }
}
