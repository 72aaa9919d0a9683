//! The [`Value`] sum type.
//!
//! A `Value` holds any JSON-shaped datum. Integers and doubles are separate
//! variants so that `1` and `1.0` keep their lexical kind through a round trip,
//! and `Null` is an ordinary inhabited variant: an object entry holding `Null`
//! is not the same thing as a missing entry.
//!
//! Behaviour lives elsewhere: equality and hashing in [`eq`](crate::eq),
//! decoding in [`decode`](crate::decode), encoding in [`encode`](crate::encode).

use std::fmt;

use thiserror::Error;

use crate::error::ValueError;
use crate::path::Path;

/// Entries of an object in insertion order.
pub type Map = indexmap::IndexMap<String, Value>;

/// Any JSON-shaped value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Numbers written without fraction or exponent that fit in an `i64`.
    Int(i64),
    /// Every other number.
    Double(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Order is ignored by equality.
    Object(Map),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

/// A view asked for one variant and found another.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected}, found {actual}")]
pub struct WrongVariant {
    pub expected: Kind,
    pub actual: Kind,
}

impl WrongVariant {
    /// Attach the location of the viewed value.
    pub fn at(self, path: Path) -> ValueError {
        ValueError::WrongType {
            path,
            expected: self.expected,
            actual: self.actual,
        }
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn wrong(&self, expected: Kind) -> WrongVariant {
        WrongVariant {
            expected,
            actual: self.kind(),
        }
    }

    pub fn as_bool(&self) -> Result<bool, WrongVariant> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.wrong(Kind::Bool)),
        }
    }

    pub fn as_i64(&self) -> Result<i64, WrongVariant> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.wrong(Kind::Int)),
        }
    }

    /// View as a double. Only the `Double` variant qualifies; use
    /// [`Value::as_number`] to accept integers as well.
    pub fn as_f64(&self) -> Result<f64, WrongVariant> {
        match self {
            Value::Double(f) => Ok(*f),
            other => Err(other.wrong(Kind::Double)),
        }
    }

    /// Either numeric variant, widened to `f64`.
    pub fn as_number(&self) -> Result<f64, WrongVariant> {
        match self {
            Value::Int(i) => Ok(*i as f64),
            Value::Double(f) => Ok(*f),
            other => Err(other.wrong(Kind::Double)),
        }
    }

    pub fn as_str(&self) -> Result<&str, WrongVariant> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.wrong(Kind::String)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], WrongVariant> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.wrong(Kind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Map, WrongVariant> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.wrong(Kind::Object)),
        }
    }

    /// Look up `key` if this is an object. `None` for absent keys and for
    /// every other variant.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_return_payload_for_matching_variant() {
        assert_eq!(Value::Bool(true).as_bool(), Ok(true));
        assert_eq!(Value::Int(7).as_i64(), Ok(7));
        assert_eq!(Value::Double(0.5).as_f64(), Ok(0.5));
        assert_eq!(Value::String("x".into()).as_str(), Ok("x"));
        assert_eq!(Value::Array(vec![Value::Null]).as_array().map(<[_]>::len), Ok(1));
    }

    #[test]
    fn views_report_expected_and_actual() {
        let err = Value::Int(5).as_str().unwrap_err();
        assert_eq!(
            err,
            WrongVariant {
                expected: Kind::String,
                actual: Kind::Int
            }
        );
        assert_eq!(err.to_string(), "expected string, found int");
    }

    #[test]
    fn as_f64_rejects_int_but_as_number_widens() {
        assert!(Value::Int(1).as_f64().is_err());
        assert_eq!(Value::Int(1).as_number(), Ok(1.0));
    }

    #[test]
    fn wrong_variant_at_attaches_path() {
        let err = Value::Null.as_object().unwrap_err().at(Path::root().key("doc"));
        assert_eq!(err.to_string(), "wrong type at $.doc: expected object, found null");
    }

    #[test]
    fn get_on_non_object_is_none() {
        assert_eq!(Value::Array(vec![]).get("a"), None);
    }

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
    }
}
