//! Serde serialization and deserialization for Value
//!
//! Data variants map straight onto the serde data model. `Object` and
//! `Resource` are not data and serialize as errors; deserialization never
//! produces them. Arrays serialize as sequences when list-shaped and as
//! maps otherwise.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::{Array, Key};
use crate::core::value::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),

            Value::Boolean(b) => serializer.serialize_bool(*b),

            Value::Integer(i) => serializer.serialize_i64(*i),

            Value::Float(f) => serializer.serialize_f64(*f),

            Value::Text(t) => serializer.serialize_str(t),

            Value::Array(arr) => {
                if arr.is_list() {
                    let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                    for value in arr.values() {
                        seq.serialize_element(value)?;
                    }
                    seq.end()
                } else {
                    let mut map = serializer.serialize_map(Some(arr.len()))?;
                    for (key, value) in arr.iter() {
                        map.serialize_entry(key, value)?;
                    }
                    map.end()
                }
            }

            Value::Object(obj) => Err(S::Error::custom(format!(
                "object {} is not serializable data",
                obj.class_name()
            ))),

            Value::Resource(res) => Err(S::Error::custom(format!(
                "resource({}) is not serializable data",
                res.kind()
            ))),
        }
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Index(i) => serializer.serialize_i64(*i),
            Key::Name(n) => serializer.serialize_str(n),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid data value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Boolean(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v <= i64::MAX as u64 {
            Ok(Value::Integer(v as i64))
        } else {
            Ok(Value::Float(v as f64))
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::text(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = Array::new();
        while let Some(element) = seq.next_element::<Value>()? {
            array.push(element);
        }
        Ok(Value::Array(array))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut array = Array::new();
        while let Some((key, value)) = map.next_entry::<Key, Value>()? {
            array.insert(key, value);
        }
        Ok(Value::Array(array))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or text collection key")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Key::Index(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Key::Index)
            .map_err(|_| E::custom(format!("integer key {v} is out of range")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Key::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Key::Name(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::boolean(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::integer(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Value::text("hi")).unwrap(), "\"hi\"");
    }

    #[test]
    fn test_serialize_list_as_json_array() {
        let value: Value = vec![Value::integer(1), Value::integer(2)].into();
        assert_eq!(serde_json::to_string(&value).unwrap(), "[1,2]");
    }

    #[test]
    fn test_serialize_keyed_array_as_json_object() {
        let mut array = Array::new();
        array.insert(Key::from("a"), Value::integer(1));
        array.insert(Key::Index(0), Value::integer(2));
        let text = serde_json::to_string(&Value::Array(array)).unwrap();
        assert_eq!(text, r#"{"a":1,"0":2}"#);
    }

    #[test]
    fn test_serialize_object_fails() {
        #[derive(Debug)]
        struct Marker;
        impl crate::ObjectValue for Marker {
            fn class_name(&self) -> &str {
                "Marker"
            }
        }
        assert!(serde_json::to_string(&Value::object(Marker)).is_err());
        assert!(serde_json::to_string(&Value::resource("stream")).is_err());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let original: Value = Value::from(json!({"a": [1, 2.5, "x", null], "b": true}));
        let text = serde_json::to_string(&original).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn test_deserialize_big_u64_widens() {
        let back: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(back, Value::float(u64::MAX as f64));
    }
}
