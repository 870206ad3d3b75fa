//! Recursive type-checked merge
//!
//! Merging never changes the shape of an existing value: `none` on either side
//! yields the other side, matching kinds merge (scalars overwrite, containers
//! merge child-wise) and anything else is a cast error. The whole admixture is
//! checked before the first write, so a failed merge leaves the original
//! untouched.

use crate::error::{PropertyError, Result};

use super::{Property, NONE};

impl Property {
    /// Merge `admixture` into `original`, consuming it
    pub fn replace(original: &mut Property, admixture: Property) -> Result<()> {
        check_mergeable(original, &admixture)?;
        merge_owned(original, admixture);
        Ok(())
    }

    /// Merge a borrowed `admixture` into `original`
    pub fn replace_from(original: &mut Property, admixture: &Property) -> Result<()> {
        check_mergeable(original, admixture)?;
        merge_borrowed(original, admixture);
        Ok(())
    }

    /// Merged copy of `original` and `admixture`; both inputs stay as they are
    pub fn merge(original: &Property, admixture: &Property) -> Result<Property> {
        let mut out = original.clone();
        Property::replace_from(&mut out, admixture)?;
        Ok(out)
    }
}

fn check_mergeable(original: &Property, admixture: &Property) -> Result<()> {
    match (original, admixture) {
        (_, Property::None) | (Property::None, _) => Ok(()),
        (Property::Dictionary(ours), Property::Dictionary(theirs)) => theirs
            .iter()
            .try_for_each(|(key, value)| check_mergeable(ours.get(key.as_str()).unwrap_or(&NONE), value)),
        (Property::Array(ours), Property::Array(theirs)) => theirs
            .iter()
            .try_for_each(|(index, value)| check_mergeable(ours.get(index).unwrap_or(&NONE), value)),
        (ours, theirs) if ours.get_type() == theirs.get_type() => Ok(()),
        (ours, theirs) => Err(PropertyError::cast(ours.get_type(), theirs.get_type())),
    }
}

fn merge_owned(original: &mut Property, admixture: Property) {
    match (original, admixture) {
        (_, Property::None) => {}
        (Property::Dictionary(ours), Property::Dictionary(theirs)) => {
            for (key, value) in theirs {
                merge_owned(ours.entry(key).or_default(), value);
            }
        }
        (Property::Array(ours), Property::Array(theirs)) => {
            for (index, value) in theirs {
                merge_owned(ours.entry(index).or_default(), value);
            }
        }
        (ours, theirs) => *ours = theirs,
    }
}

fn merge_borrowed(original: &mut Property, admixture: &Property) {
    match (original, admixture) {
        (_, Property::None) => {}
        (Property::Dictionary(ours), Property::Dictionary(theirs)) => {
            for (key, value) in theirs {
                merge_borrowed(ours.entry(key.clone()).or_default(), value);
            }
        }
        (Property::Array(ours), Property::Array(theirs)) => {
            for (index, value) in theirs {
                merge_borrowed(ours.entry(*index).or_default(), value);
            }
        }
        (ours, theirs) => *ours = theirs.clone(),
    }
}
