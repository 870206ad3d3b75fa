//! Serde support
//!
//! Arrays serialize as dense sequences with `null` in the gaps. Every number
//! deserializes as a `Double` since self-describing formats do not keep the
//! numeric subkind.

use core::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::keystring::Keystring;

use super::{Array, Dictionary, Property, NONE};

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Property::None => serializer.serialize_unit(),
            Property::Bool(v) => serializer.serialize_bool(*v),
            Property::Int(v) => serializer.serialize_i32(*v),
            Property::Long(v) => serializer.serialize_i64(*v),
            Property::Float(v) => serializer.serialize_f32(*v),
            Property::Double(v) => serializer.serialize_f64(*v),
            Property::String(v) => serializer.serialize_str(v),
            Property::Array(values) => {
                let len = values.keys().next_back().map_or(0, |last| last + 1);
                let mut seq = serializer.serialize_seq(Some(len))?;
                for index in 0..len {
                    seq.serialize_element(values.get(&index).unwrap_or(&NONE))?;
                }
                seq.end()
            }
            Property::Dictionary(values) => {
                let mut map = serializer.serialize_map(Some(values.len()))?;
                for (key, value) in values {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct PropertyVisitor;

impl<'de> Visitor<'de> for PropertyVisitor {
    type Value = Property;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a property tree value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Property, E> {
        Ok(Property::None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Property, E> {
        Ok(Property::None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Property, D::Error> {
        Property::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Property, E> {
        Ok(Property::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Property, E> {
        Ok(Property::Double(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Property, E> {
        Ok(Property::Double(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Property, E> {
        Ok(Property::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Property, E> {
        Ok(Property::String(Keystring::from(v)))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Property, E> {
        Ok(Property::String(Keystring::from(v)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Property, A::Error> {
        let mut values = Array::new();
        while let Some(value) = seq.next_element::<Property>()? {
            values.insert(values.len(), value);
        }
        Ok(Property::Array(values))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Property, A::Error> {
        let mut values = Dictionary::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<Keystring, Property>()? {
            values.insert(key, value);
        }
        Ok(Property::Dictionary(values))
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropertyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_come_back_as_double() {
        let mut tree = Property::None;
        tree.set("int", 7).unwrap();
        tree.set("long", 8i64).unwrap();
        tree.set("float", 0.5f32).unwrap();

        let text = serde_json::to_string(&tree).unwrap();
        let back: Property = serde_json::from_str(&text).unwrap();

        assert_eq!(back.get("int").unwrap(), &Property::from(7.0));
        assert_eq!(back.get("long").unwrap(), &Property::from(8.0));
        assert_eq!(back.get("float").unwrap(), &Property::from(0.5));
    }

    #[test]
    fn test_array_gaps_serialize_as_null() {
        let mut tree = Property::array();
        if let Property::Array(values) = &mut tree {
            values.insert(2, Property::from(true));
        }
        assert_eq!(serde_json::to_string(&tree).unwrap(), "[null,null,true]");
    }

    #[test]
    fn test_dictionary_keeps_insertion_order() {
        let back: Property = serde_json::from_str(r#"{"b":"x","a":null,"c":[1]}"#).unwrap();
        let keys: Vec<String> = back
            .iter()
            .unwrap()
            .map(|(key, _)| key.key().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert!(back.get("a").unwrap().is_none());
        assert_eq!(serde_json::to_string(&back).unwrap(), r#"{"b":"x","a":null,"c":[1.0]}"#);
    }

    #[test]
    fn test_none_round_trip() {
        let text = serde_json::to_string(&Property::None).unwrap();
        assert_eq!(text, "null");
        let back: Property = serde_json::from_str(&text).unwrap();
        assert!(back.is_none());
    }
}
