//! `serde::Deserialize` for [`Value`], so values can sit inside derived models.
//!
//! Self-describing formats drive the visitor directly. The numeric rule matches
//! the cursor decoder: integers that fit in an `i64` become `Int`, every other
//! number becomes `Double`.
//!
//! serde maps `null` onto `None` for `Option` fields, which loses the
//! difference between an explicit null and a missing field. [`present`] keeps
//! it: pair it with `#[serde(default)]` and a missing field is `None` while an
//! explicit `null` is `Some(Value::Null)`. [`present_map`] applies the same
//! rule to every entry of a map of optional values.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::value::{Map, Value};

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Deserialize an optional field that is present whenever its key is.
///
/// ```rust
/// use search_value::Value;
///
/// #[derive(serde::Deserialize)]
/// struct Doc {
///     #[serde(default, deserialize_with = "search_value::de::present")]
///     upsert: Option<Value>,
/// }
///
/// let missing: Doc = serde_json::from_str("{}").unwrap();
/// let null: Doc = serde_json::from_str(r#"{"upsert":null}"#).unwrap();
/// assert_eq!(missing.upsert, None);
/// assert_eq!(null.upsert, Some(Value::Null));
/// ```
pub fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// [`present`] for every entry of a keyed container: an entry holding `null`
/// is `Some(Value::Null)`, a missing key has no entry at all.
///
/// ```rust
/// use indexmap::IndexMap;
/// use search_value::Value;
///
/// #[derive(serde::Deserialize)]
/// struct Doc {
///     #[serde(deserialize_with = "search_value::de::present_map")]
///     params: IndexMap<String, Option<Value>>,
/// }
///
/// let doc: Doc = serde_json::from_str(r#"{"params":{"nilVal":null}}"#).unwrap();
/// assert_eq!(doc.params.get("nilVal"), Some(&Some(Value::Null)));
/// assert_eq!(doc.params.get("other"), None);
/// ```
pub fn present_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, Option<Value>>, D::Error> {
    let entries = Map::deserialize(deserializer)?;
    Ok(entries.into_iter().map(|(key, value)| (key, Some(value))).collect())
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, a number, a string, an array or an object")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(match i64::try_from(v) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Double(v as f64),
        })
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Double(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}
