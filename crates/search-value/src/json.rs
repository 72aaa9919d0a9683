//! `serde_json` as the structured source and sink.
//!
//! [`JsonCursor`] walks an already parsed `serde_json::Value`. With the
//! `preserve_order` feature the parsed document keeps object keys in source
//! order, so decoded objects do too. Numbers keep their lexical kind:
//! `serde_json` only reports `as_i64` for integral literals that fit, which is
//! exactly the integer-before-double rule of the decoder.

use std::io;
use std::slice;

use serde_json::Value as JsonValue;

use crate::decode::{decode, Cursor};
use crate::encode::encode;
use crate::error::{Result, ValueError};
use crate::path::Path;
use crate::value::Value;

/// Cursor over a parsed JSON document.
#[derive(Debug, Clone)]
pub struct JsonCursor<'a> {
    value: &'a JsonValue,
    path: Path,
}

impl<'a> JsonCursor<'a> {
    /// Cursor at the root of `value`.
    pub fn new(value: &'a JsonValue) -> Self {
        Self::at(value, Path::root())
    }

    /// Cursor at `value`, reporting errors relative to `path`.
    pub fn at(value: &'a JsonValue, path: Path) -> Self {
        Self { value, path }
    }

    pub fn json(&self) -> &'a JsonValue {
        self.value
    }
}

/// Elements of a JSON array as child cursors.
#[derive(Debug)]
pub struct Elements<'a> {
    items: std::iter::Enumerate<slice::Iter<'a, JsonValue>>,
    parent: Path,
}

impl<'a> Iterator for Elements<'a> {
    type Item = JsonCursor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, value) = self.items.next()?;
        Some(JsonCursor::at(value, self.parent.index(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// Entries of a JSON object as `(key, child cursor)` pairs.
pub struct Entries<'a> {
    entries: serde_json::map::Iter<'a>,
    parent: Path,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (String, JsonCursor<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next()?;
        Some((key.clone(), JsonCursor::at(value, self.parent.key(key.as_str()))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a> Cursor for JsonCursor<'a> {
    type Elements = Elements<'a>;
    type Entries = Entries<'a>;

    fn path(&self) -> &Path {
        &self.path
    }

    fn decode_null(&self) -> bool {
        self.value.is_null()
    }

    fn decode_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    fn decode_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    fn decode_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    fn decode_string(&self) -> Option<String> {
        self.value.as_str().map(str::to_owned)
    }

    fn indexed(&self) -> Option<Self::Elements> {
        self.value.as_array().map(|items| Elements {
            items: items.iter().enumerate(),
            parent: self.path.clone(),
        })
    }

    fn keyed(&self) -> Option<Self::Entries> {
        self.value.as_object().map(|map| Entries {
            entries: map.iter(),
            parent: self.path.clone(),
        })
    }
}

/// Decode a parsed JSON document.
pub fn from_json(json: &JsonValue) -> Result<Value> {
    decode(&JsonCursor::new(json))
}

/// Parse JSON text and decode it.
pub fn from_str(text: &str) -> Result<Value> {
    let json: JsonValue = serde_json::from_str(text)?;
    from_json(&json)
}

/// Parse JSON bytes and decode them.
pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    let json: JsonValue = serde_json::from_slice(bytes)?;
    from_json(&json)
}

/// Encode as JSON into `writer`. Sink failures carry the path being written.
pub fn to_writer<W: io::Write>(writer: W, value: &Value) -> Result<()> {
    let mut serializer = serde_json::Serializer::new(writer);
    encode(value, &mut serializer).map_err(|err| ValueError::Encode {
        path: err.path,
        source: err.source,
    })
}

/// Encode as compact JSON bytes.
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    to_writer(&mut out, value)?;
    Ok(out)
}

/// Encode as compact JSON text.
pub fn to_string(value: &Value) -> Result<String> {
    let bytes = to_vec(value)?;
    // serde_json only ever writes UTF-8, so this never replaces anything.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encode as indented JSON text.
pub fn to_string_pretty(value: &Value) -> Result<String> {
    let mut out = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::pretty(&mut out);
    encode(value, &mut serializer).map_err(|err| ValueError::Encode {
        path: err.path,
        source: err.source,
    })?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

impl From<Value> for JsonValue {
    /// Non-finite doubles become `null`, as `serde_json` writes them.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Int(i) => JsonValue::from(i),
            Value::Double(f) => serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Object(map) => JsonValue::Object(map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect()),
        }
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = ValueError;

    fn try_from(json: &JsonValue) -> Result<Self> {
        from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cursor_children_carry_paths() {
        let doc = json!({"hits": [{"id": 1}]});
        let cursor = JsonCursor::new(&doc);
        let (key, hits) = cursor.keyed().unwrap().next().unwrap();
        assert_eq!(key, "hits");
        let first = hits.indexed().unwrap().next().unwrap();
        assert_eq!(first.path().to_string(), "$.hits[0]");
    }

    #[test]
    fn integral_literal_decodes_as_i64_only_without_fraction() {
        let doc: JsonValue = serde_json::from_str("[1, 1.0, 1e3, 9223372036854775808]").unwrap();
        let kinds: Vec<_> = JsonCursor::new(&doc)
            .indexed()
            .unwrap()
            .map(|c| c.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                Some(crate::Kind::Int),
                Some(crate::Kind::Double),
                Some(crate::Kind::Double),
                Some(crate::Kind::Double)
            ]
        );
    }

    #[test]
    fn non_finite_double_converts_to_json_null() {
        assert_eq!(JsonValue::from(Value::Double(f64::INFINITY)), JsonValue::Null);
    }
}
