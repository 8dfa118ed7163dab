//! Conversion of arbitrary serializable data into [`Value`] trees.
//!
//! This module provides [`ValueSerializer`], a [`serde::Serializer`] whose
//! output is a [`Value`]. It is the bridge that lets builder operations such
//! as `merge` and `attributes` accept any `T: Serialize` — structs, maps,
//! vectors, or hand-built [`Value`]s — through one uniform path.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use spindle::{to_value, Value};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert!(value.is_object());
//! ```

use crate::error::{Error, Result};
use crate::map::Map;
use crate::value::{Number, Value};
use serde::{ser, Serialize};

/// Converts any `T: Serialize` to a [`Value`].
///
/// Struct fields and map keys are reached through the same serde path, so a
/// `#[derive(Serialize)]` struct and a string-keyed map produce equivalent
/// mappings.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use spindle::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct User { id: u32, name: String }
///
/// let user = User { id: 7, name: "Alice".to_string() };
/// let value = to_value(&user).unwrap();
///
/// let obj = value.as_object().unwrap();
/// assert_eq!(obj.get("id").and_then(|v| v.as_i64()), Some(7));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// A serde serializer that produces [`Value`] trees.
///
/// Usually reached through [`to_value`]; exposed for callers that want to
/// drive serialization themselves.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeValueMap {
    map: Map,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeValueMap;
    type SerializeStruct = SerializeValueMap;
    type SerializeStructVariant = SerializeValueMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        // externally tagged, matching what the JSON/YAML encoders do
        let mut map = Map::new();
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::tagged(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeValueMap> {
        Ok(SerializeValueMap::tagged(variant))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec {
            vec: Vec::new(),
            variant: None,
        }
    }

    fn tagged(variant: &'static str) -> Self {
        SerializeVec {
            vec: Vec::new(),
            variant: Some(variant),
        }
    }

    fn finish(self) -> Value {
        wrap_variant(self.variant, Value::Array(self.vec))
    }
}

impl SerializeValueMap {
    fn new() -> Self {
        SerializeValueMap {
            map: Map::new(),
            current_key: None,
            variant: None,
        }
    }

    fn tagged(variant: &'static str) -> Self {
        SerializeValueMap {
            map: Map::new(),
            current_key: None,
            variant: Some(variant),
        }
    }

    fn finish(self) -> Value {
        wrap_variant(self.variant, Value::Object(self.map))
    }
}

// Enum variants carrying data come out externally tagged, matching the
// JSON/YAML encoders.
fn wrap_variant(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(tag) => {
            let mut map = Map::new();
            map.insert(tag.to_string(), value);
            Value::Object(map)
        }
        None => value,
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeValueMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Dish {
        name: String,
        vegetarian: bool,
        rating: f64,
    }

    #[test]
    fn test_struct_to_value() {
        let dish = Dish {
            name: "Ramen".to_string(),
            vegetarian: false,
            rating: 4.5,
        };

        let value = to_value(&dish).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name"), Some(&Value::from("Ramen")));
        assert_eq!(obj.get("vegetarian"), Some(&Value::Bool(false)));
        assert_eq!(obj.get("rating"), Some(&Value::from(4.5)));

        // field declaration order is preserved
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "vegetarian", "rating"]);
    }

    #[test]
    fn test_map_to_value() {
        let mut source = BTreeMap::new();
        source.insert("a", 1);
        source.insert("b", 2);

        let value = to_value(&source).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(obj.get("b").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_scalar_to_value() {
        assert_eq!(to_value(&42).unwrap(), Value::from(42));
        assert_eq!(to_value("hello").unwrap(), Value::from("hello"));
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(
            to_value(&vec![1, 2, 3]).unwrap(),
            Value::from(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_enum_variants() {
        #[derive(Serialize)]
        enum Topping {
            None,
            Named(String),
            Custom { name: String, extra: bool },
        }

        assert_eq!(to_value(&Topping::None).unwrap(), Value::from("None"));

        let named = to_value(&Topping::Named("Egg".to_string())).unwrap();
        assert_eq!(
            named.as_object().and_then(|o| o.get("Named")),
            Some(&Value::from("Egg"))
        );

        let custom = to_value(&Topping::Custom {
            name: "Nori".to_string(),
            extra: true,
        })
        .unwrap();
        let inner = custom
            .as_object()
            .and_then(|o| o.get("Custom"))
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(inner.get("name"), Some(&Value::from("Nori")));
        assert_eq!(inner.get("extra"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_non_string_keys_rejected() {
        let mut source = BTreeMap::new();
        source.insert(1, "one");
        assert!(to_value(&source).is_err());
    }
}
