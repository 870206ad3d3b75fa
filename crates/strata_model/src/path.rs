//! Slash-delimited hierarchical addresses
//!
//! A [`PathId`] is an immutable list of [`Keystring`] segments. Parsing
//! accepts both `/` and `\` as separators and drops empty segments, so
//! `"/parent//child/"` and `"parent\\child"` address the same node. The
//! canonical text form joins segments with `/`.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use strata_core::Keystring;

const SEPARATORS: [char; 2] = ['/', '\\'];
const JOINER: &str = "/";

/// Immutable sequence of path segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathId {
    segments: Vec<Keystring>,
    joined: Keystring,
}

impl PathId {
    fn from_segments(segments: Vec<Keystring>) -> Self {
        let joined = Keystring::from(
            segments
                .iter()
                .map(Keystring::as_str)
                .collect::<Vec<_>>()
                .join(JOINER),
        );
        Self { segments, joined }
    }

    fn parse(path: &str) -> impl Iterator<Item = Keystring> + '_ {
        path.split(SEPARATORS)
            .filter(|segment| !segment.is_empty())
            .map(Keystring::from)
    }

    /// Parse a path string
    pub fn from_string(path: &str) -> Self {
        Self::from_segments(Self::parse(path).collect())
    }

    /// Parse a path held in a key
    pub fn from_keystring(path: &Keystring) -> Self {
        Self::from_string(path.as_str())
    }

    /// Check if the path has no segments
    pub fn empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alias for [`empty`](Self::empty)
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// New path with the parsed `path` appended
    pub fn add(&self, path: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(Self::parse(path));
        Self::from_segments(segments)
    }

    /// First segment, empty for an empty path
    pub fn front(&self) -> Keystring {
        self.segments.first().cloned().unwrap_or_default()
    }

    /// Everything after the first segment
    pub fn tail(&self) -> Self {
        Self::from_segments(self.segments.iter().skip(1).cloned().collect())
    }

    /// Last segment, empty for an empty path
    pub fn back(&self) -> Keystring {
        self.segments.last().cloned().unwrap_or_default()
    }

    /// Everything before the last segment
    pub fn parent(&self) -> Self {
        let end = self.segments.len().saturating_sub(1);
        Self::from_segments(self.segments[..end].to_vec())
    }

    /// Canonical `/`-joined form
    pub fn to_keystring(&self) -> Keystring {
        self.joined.clone()
    }

    /// Canonical `/`-joined form, borrowed
    pub fn c_str(&self) -> &str {
        self.joined.as_str()
    }

    /// Iterate segments front to back
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Keystring> + ExactSizeIterator {
        self.segments.iter()
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_str())
    }
}

impl FromStr for PathId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl From<&str> for PathId {
    fn from(path: &str) -> Self {
        Self::from_string(path)
    }
}

impl From<&PathId> for PathId {
    fn from(path: &PathId) -> Self {
        path.clone()
    }
}

impl From<&Keystring> for PathId {
    fn from(path: &Keystring) -> Self {
        Self::from_keystring(path)
    }
}
