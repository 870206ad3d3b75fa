//! Enumeration of overlay children
//!
//! Writable views enumerate only what the diff already holds; they never
//! create anything and never surface origin-only children. Read-only views
//! enumerate the union of both sides for dictionaries; an array enumerates
//! the indices of the side reads resolve to, with diff gaps showing the
//! origin element at the same index. In both cases a dictionary child whose
//! diff value is an explicit `none` is a tombstone: it is still yielded, but
//! with its origin hidden.

use core::marker::PhantomData;

use strata_core::property::IterMut;
use strata_core::{Property, PropertyIndex, PropertyKey, NONE};

use crate::error::Result;
use crate::item::{origin_child, ConstReflectedItem, FromReflected, ReflectedItem, ReflectedItemBase};

/// The diff entry under `key` is an explicit `none`
pub(crate) fn is_tombstone(diff: &Property, key: &str) -> bool {
    match diff {
        Property::Dictionary(values) => values.get(key).is_some_and(Property::is_none),
        _ => false,
    }
}

fn origin_at<'a>(orig: &'a Property, key: PropertyKey<'_>) -> Result<&'a Property> {
    match key {
        PropertyKey::Index(index) => origin_child(orig, &index),
        PropertyKey::Key(key) => origin_child(orig, key),
    }
}

fn diff_at<'a>(diff: &'a Property, key: PropertyKey<'_>) -> Result<&'a Property> {
    Ok(match key {
        PropertyKey::Index(index) => index.get_in(diff)?,
        PropertyKey::Key(key) => key.get_in(diff)?,
    })
}

/// Lazy sequence of typed child views over the diff of a writable overlay
pub struct ReflectedRangeMut<'a, T> {
    orig: &'a Property,
    paired: bool,
    inner: Option<IterMut<'a>>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> ReflectedRangeMut<'a, T> {
    /// Enumerate the children of `item`'s diff
    pub fn new(item: ReflectedItem<'a>) -> Result<Self> {
        let ReflectedItemBase { orig, diff } = item;
        let paired = diff.get_type().is_container() && orig.get_type() == diff.get_type();
        Ok(Self {
            orig,
            paired,
            inner: Some(diff.iter_mut()?),
            _marker: PhantomData,
        })
    }

    /// A range with nothing to enumerate
    pub fn empty() -> Self {
        Self {
            orig: &NONE,
            paired: false,
            inner: None,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for ReflectedRangeMut<'a, T>
where
    T: FromReflected<'a, &'a mut Property>,
{
    type Item = Result<(PropertyKey<'a>, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, diff) = self.inner.as_mut()?.next()?;
        let orig = match key {
            PropertyKey::Key(_) if diff.is_none() => Ok(&NONE),
            _ if self.paired => origin_at(self.orig, key),
            _ => Ok(&NONE),
        };
        Some(orig.and_then(|orig| T::from_item(ReflectedItemBase::new(orig, diff)).map(|item| (key, item))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<'a, T> ExactSizeIterator for ReflectedRangeMut<'a, T> where T: FromReflected<'a, &'a mut Property> {}

/// Lazy sequence of typed child views over both sides
pub struct ReflectedRange<'a, T> {
    orig: &'a Property,
    diff: &'a Property,
    paired: bool,
    keys: std::vec::IntoIter<PropertyKey<'a>>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> ReflectedRange<'a, T> {
    /// Enumerate the children of both sides of `item`
    pub fn new(item: ConstReflectedItem<'a>) -> Result<Self> {
        let orig = item.origin_property();
        let diff = item.diff_ref();
        let paired = diff.is_none() || orig.get_type() == diff.get_type();

        let keys: Vec<PropertyKey<'a>> = match (orig, diff) {
            (_, Property::None) => orig.iter()?.map(|(key, _)| key).collect(),
            (Property::Dictionary(values), Property::Dictionary(changes)) => values
                .keys()
                .chain(changes.keys().filter(|key| !values.contains_key(key.as_str())))
                .map(PropertyKey::Key)
                .collect(),
            _ => diff.iter()?.map(|(key, _)| key).collect(),
        };

        Ok(Self {
            orig,
            diff,
            paired,
            keys: keys.into_iter(),
            _marker: PhantomData,
        })
    }

    fn pair(&self, key: PropertyKey<'a>) -> Result<ConstReflectedItem<'a>> {
        if let PropertyKey::Key(name) = key {
            if is_tombstone(self.diff, name) {
                return Ok(ReflectedItemBase::new(&NONE, &NONE));
            }
        }
        let orig = if self.paired {
            origin_at(self.orig, key)?
        } else {
            &NONE
        };
        Ok(ReflectedItemBase::new(orig, diff_at(self.diff, key)?))
    }
}

impl<'a, T> Iterator for ReflectedRange<'a, T>
where
    T: FromReflected<'a, &'a Property>,
{
    type Item = Result<(PropertyKey<'a>, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        Some(self.pair(key).and_then(T::from_item).map(|item| (key, item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for ReflectedRange<'a, T> where T: FromReflected<'a, &'a Property> {}

impl<'a> ReflectedItemBase<'a, &'a mut Property> {
    /// Consume the view and enumerate its diff children
    pub fn into_range<T>(self) -> Result<ReflectedRangeMut<'a, T>> {
        ReflectedRangeMut::new(self)
    }

    /// Enumerate the diff children
    pub fn range<T>(&mut self) -> Result<ReflectedRangeMut<'_, T>> {
        self.reborrow().into_range()
    }

    /// Consume the view and enumerate the diff children under `key`
    ///
    /// A missing diff child yields an empty range; nothing is vivified.
    pub fn into_child_range<T, I: PropertyIndex>(self, key: I) -> Result<ReflectedRangeMut<'a, T>> {
        let orig = origin_child(self.orig, &key)?;
        match key.find_in(self.diff)? {
            Some(diff) => ReflectedRangeMut::new(ReflectedItemBase::new(orig, diff)),
            None => Ok(ReflectedRangeMut::empty()),
        }
    }
}

impl<'a> ReflectedItemBase<'a, &'a Property> {
    /// Enumerate the children of both sides
    pub fn range<T>(&self) -> Result<ReflectedRange<'a, T>> {
        ReflectedRange::new(*self)
    }

    /// Enumerate the children of both sides under `key`
    pub fn child_range<T, I: PropertyIndex>(&self, key: I) -> Result<ReflectedRange<'a, T>> {
        self.get_item(key)?.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(entries: &[(&str, i32)]) -> Property {
        entries.iter().map(|(key, value)| (*key, Property::from(*value))).collect()
    }

    fn keys<'a, T>(range: impl Iterator<Item = Result<(PropertyKey<'a>, T)>>) -> Vec<String> {
        range
            .map(|entry| entry.unwrap().0.key().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_mutable_range_sees_only_diff() {
        let orig = dictionary(&[("a", 1), ("b", 2)]);
        let mut diff = Property::None;
        let mut item = ReflectedItem::new(&orig, &mut diff);

        assert_eq!(item.range::<ReflectedItem<'_>>().unwrap().count(), 0);

        item.get_item("b").unwrap().set(5);
        item.get_item("c").unwrap().set(6);
        let entries: Vec<(String, i32)> = item
            .range::<ReflectedItem<'_>>()
            .unwrap()
            .map(|entry| {
                let (key, child) = entry.unwrap();
                (key.key().unwrap().to_string(), child.as_int().unwrap())
            })
            .collect();
        assert_eq!(entries, vec![("b".to_string(), 5), ("c".to_string(), 6)]);
    }

    #[test]
    fn test_mutable_range_pairs_origin() {
        let orig = dictionary(&[("a", 1)]);
        let mut diff = dictionary(&[("a", 2)]);
        let mut item = ReflectedItem::new(&orig, &mut diff);

        for entry in item.range::<ReflectedItem<'_>>().unwrap() {
            let (_, mut child) = entry.unwrap();
            assert!(child.origin() == 1i32);
            child.set(3);
        }
        assert_eq!(diff, dictionary(&[("a", 3)]));
    }

    #[test]
    fn test_missing_child_range_is_empty() {
        let orig = Property::None;
        let mut diff = Property::None;
        let item = ReflectedItem::new(&orig, &mut diff);

        assert_eq!(item.into_child_range::<ReflectedItem<'_>, _>("children").unwrap().len(), 0);
        assert!(diff.is_none());
    }

    #[test]
    fn test_const_range_is_union() {
        let orig = dictionary(&[("a", 1), ("b", 2)]);
        let diff = dictionary(&[("b", 5), ("c", 6)]);
        let item = ConstReflectedItem::new(&orig, &diff);

        let range = item.range::<ConstReflectedItem<'_>>().unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(keys(range), vec!["a", "b", "c"]);

        let changed: Vec<bool> = item
            .range::<ConstReflectedItem<'_>>()
            .unwrap()
            .map(|entry| entry.unwrap().1.has_changes())
            .collect();
        assert_eq!(changed, vec![false, true, true]);
    }

    #[test]
    fn test_const_range_origin_only() {
        let orig = dictionary(&[("a", 1), ("b", 2)]);
        let item = ConstReflectedItem::new(&orig, &NONE);
        assert_eq!(keys(item.range::<ConstReflectedItem<'_>>().unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn test_tombstone_hides_origin() {
        let orig = dictionary(&[("a", 1)]);
        let mut diff = Property::None;
        diff.set("a", Property::None).unwrap();
        let item = ConstReflectedItem::new(&orig, &diff);

        let entries: Vec<_> = item
            .range::<ConstReflectedItem<'_>>()
            .unwrap()
            .map(Result::unwrap)
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].1.is_none());
    }

    #[test]
    fn test_const_array_range_follows_diff() {
        let orig: Property = [1, 2].into_iter().map(Property::from).collect();
        let mut diff = Property::None;
        diff.set(3usize, 9).unwrap();
        let item = ConstReflectedItem::new(&orig, &diff);

        let values: Vec<(usize, bool)> = item
            .range::<ConstReflectedItem<'_>>()
            .unwrap()
            .map(|entry| {
                let (key, child) = entry.unwrap();
                (key.index().unwrap(), child.is_none())
            })
            .collect();
        assert_eq!(values, vec![(0, false), (1, false), (2, true), (3, false)]);
    }

    #[test]
    fn test_const_array_range_after_shrink() {
        let orig: Property = [1, 2, 3].into_iter().map(Property::from).collect();
        let mut diff = orig.clone();
        diff.remove(0usize).unwrap();
        let item = ConstReflectedItem::new(&orig, &diff);

        assert_eq!(item.size().unwrap(), 2);
        let values: Vec<i32> = item
            .range::<ConstReflectedItem<'_>>()
            .unwrap()
            .map(|entry| entry.unwrap().1.as_int().unwrap())
            .collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn test_scalar_range_fails() {
        let orig = Property::from(1);
        let item = ConstReflectedItem::new(&orig, &NONE);
        assert!(item.range::<ConstReflectedItem<'_>>().is_err());
    }
}
