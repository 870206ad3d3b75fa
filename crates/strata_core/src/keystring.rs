//! Immutable shared string keys
//!
//! A [`Keystring`] is the identifier type used for dictionary keys, object ids
//! and path segments. Content is shared behind an `Arc`, so cloning a key is a
//! reference-count bump, and the FNV-1a hash of the content is computed once
//! on construction.
//!
//! An absent string (`None`) and an empty string are the same key.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Deref};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

const fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// An immutable, cheaply clonable string key
#[derive(Clone)]
pub struct Keystring {
    content: Option<Arc<str>>,
    hash: u64,
}

impl Keystring {
    /// The empty key
    pub const EMPTY: Self = Self {
        content: None,
        hash: fnv1a(b""),
    };

    /// Create an empty key
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn from_content(content: &str) -> Self {
        if content.is_empty() {
            return Self::EMPTY;
        }
        Self {
            content: Some(Arc::from(content)),
            hash: fnv1a(content.as_bytes()),
        }
    }

    /// Check if the key has no content
    #[inline]
    pub fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Length of the content in bytes
    #[inline]
    pub fn size(&self) -> usize {
        self.content.as_deref().map_or(0, str::len)
    }

    /// Stable content hash; equal content always yields an equal hash
    #[inline]
    pub fn get_hash(&self) -> u64 {
        self.hash
    }

    /// The key content
    #[inline]
    pub fn get_content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Alias for [`get_content`](Self::get_content)
    #[inline]
    pub fn c_str(&self) -> &str {
        self.get_content()
    }

    /// Alias for [`get_content`](Self::get_content)
    #[inline]
    pub fn as_str(&self) -> &str {
        self.get_content()
    }

    fn concat(&self, right: &str) -> Self {
        if right.is_empty() {
            return self.clone();
        }
        if self.empty() {
            return Self::from_content(right);
        }
        let mut joined = String::with_capacity(self.size() + right.len());
        joined.push_str(self.get_content());
        joined.push_str(right);
        Self::from(joined)
    }
}

impl Default for Keystring {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<&str> for Keystring {
    fn from(value: &str) -> Self {
        Self::from_content(value)
    }
}

impl From<String> for Keystring {
    fn from(value: String) -> Self {
        if value.is_empty() {
            return Self::EMPTY;
        }
        let hash = fnv1a(value.as_bytes());
        Self {
            content: Some(Arc::from(value)),
            hash,
        }
    }
}

impl From<&String> for Keystring {
    fn from(value: &String) -> Self {
        Self::from_content(value)
    }
}

impl From<Option<&str>> for Keystring {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::EMPTY, Self::from_content)
    }
}

impl From<&Keystring> for Keystring {
    fn from(value: &Keystring) -> Self {
        value.clone()
    }
}

impl From<Keystring> for String {
    fn from(value: Keystring) -> Self {
        value.get_content().to_owned()
    }
}

impl Deref for Keystring {
    type Target = str;

    fn deref(&self) -> &str {
        self.get_content()
    }
}

impl AsRef<str> for Keystring {
    fn as_ref(&self) -> &str {
        self.get_content()
    }
}

impl Borrow<str> for Keystring {
    fn borrow(&self) -> &str {
        self.get_content()
    }
}

impl fmt::Debug for Keystring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get_content(), f)
    }
}

impl fmt::Display for Keystring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_content())
    }
}

// Hashes like `str` so that `Borrow<str>` lookups agree with owned keys.
impl Hash for Keystring {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_content().hash(state);
    }
}

impl PartialEq for Keystring {
    fn eq(&self, other: &Self) -> bool {
        if self.hash != other.hash {
            return false;
        }
        match (&self.content, &other.content) {
            (Some(left), Some(right)) if Arc::ptr_eq(left, right) => true,
            _ => self.get_content() == other.get_content(),
        }
    }
}

impl Eq for Keystring {}

impl PartialOrd for Keystring {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keystring {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get_content().cmp(other.get_content())
    }
}

impl PartialEq<str> for Keystring {
    fn eq(&self, other: &str) -> bool {
        self.get_content() == other
    }
}

impl PartialEq<&str> for Keystring {
    fn eq(&self, other: &&str) -> bool {
        self.get_content() == *other
    }
}

impl PartialEq<String> for Keystring {
    fn eq(&self, other: &String) -> bool {
        self.get_content() == other.as_str()
    }
}

impl PartialEq<Option<&str>> for Keystring {
    fn eq(&self, other: &Option<&str>) -> bool {
        self.get_content() == other.unwrap_or("")
    }
}

impl PartialEq<Keystring> for str {
    fn eq(&self, other: &Keystring) -> bool {
        other == self
    }
}

impl PartialEq<Keystring> for &str {
    fn eq(&self, other: &Keystring) -> bool {
        other == self
    }
}

impl PartialEq<Keystring> for String {
    fn eq(&self, other: &Keystring) -> bool {
        other == self
    }
}

impl PartialEq<Keystring> for Option<&str> {
    fn eq(&self, other: &Keystring) -> bool {
        other == self
    }
}

impl Add<&Keystring> for &Keystring {
    type Output = Keystring;

    fn add(self, right: &Keystring) -> Keystring {
        self.concat(right.get_content())
    }
}

impl Add<Keystring> for Keystring {
    type Output = Keystring;

    fn add(self, right: Keystring) -> Keystring {
        self.concat(right.get_content())
    }
}

impl Add<&Keystring> for Keystring {
    type Output = Keystring;

    fn add(self, right: &Keystring) -> Keystring {
        self.concat(right.get_content())
    }
}

impl Add<&str> for Keystring {
    type Output = Keystring;

    fn add(self, right: &str) -> Keystring {
        self.concat(right)
    }
}

impl Add<&str> for &Keystring {
    type Output = Keystring;

    fn add(self, right: &str) -> Keystring {
        self.concat(right)
    }
}

impl Add<Option<&str>> for Keystring {
    type Output = Keystring;

    fn add(self, right: Option<&str>) -> Keystring {
        self.concat(right.unwrap_or(""))
    }
}

impl Add<&String> for Keystring {
    type Output = Keystring;

    fn add(self, right: &String) -> Keystring {
        self.concat(right)
    }
}

impl Add<String> for Keystring {
    type Output = Keystring;

    fn add(self, right: String) -> Keystring {
        self.concat(&right)
    }
}

impl Add<char> for Keystring {
    type Output = Keystring;

    fn add(self, right: char) -> Keystring {
        let mut buf = [0u8; 4];
        self.concat(right.encode_utf8(&mut buf))
    }
}

impl Add<Keystring> for &str {
    type Output = Keystring;

    fn add(self, right: Keystring) -> Keystring {
        Keystring::from(self).concat(right.get_content())
    }
}

impl Add<Keystring> for Option<&str> {
    type Output = Keystring;

    fn add(self, right: Keystring) -> Keystring {
        Keystring::from(self).concat(right.get_content())
    }
}

impl Add<Keystring> for String {
    type Output = Keystring;

    fn add(mut self, right: Keystring) -> Keystring {
        self.push_str(right.get_content());
        Keystring::from(self)
    }
}

impl Serialize for Keystring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.get_content())
    }
}

impl<'de> Deserialize<'de> for Keystring {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let content = String::deserialize(deserializer)?;
        Ok(Keystring::from(content))
    }
}
