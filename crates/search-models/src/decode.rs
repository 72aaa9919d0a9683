//! Hand-rolled decoding of response models.

use search_value::{Cursor, Fields, JsonCursor, Kind, Map, Value, ValueError};

use crate::error::Result;

/// A model built from the entries of one keyed container.
pub trait FromFields: Sized {
    fn from_fields<C: Cursor>(fields: &Fields<C>) -> Result<Self>;

    /// Open `cursor` as a keyed container and decode from it.
    fn from_cursor<C: Cursor>(cursor: &C) -> Result<Self> {
        Self::from_fields(&Fields::from_cursor(cursor)?)
    }
}

/// Decode a model from a parsed JSON document.
pub fn from_json<T: FromFields>(json: &serde_json::Value) -> Result<T> {
    T::from_cursor(&JsonCursor::new(json))
}

/// Decode a model from JSON text.
pub fn from_str<T: FromFields>(text: &str) -> Result<T> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    from_json(&json)
}

/// Decode a model from a JSON response body.
pub fn from_slice<T: FromFields>(bytes: &[u8]) -> Result<T> {
    let json: serde_json::Value = serde_json::from_slice(bytes)?;
    from_json(&json)
}

/// A dynamic `{ name: value }` bag. Absent and `null` both mean empty.
pub(crate) fn object_or_empty<C: Cursor>(fields: &Fields<C>, key: &str) -> Result<Map> {
    match fields.optional_value(key)? {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(ValueError::WrongType {
            path: fields.path().key(key),
            expected: Kind::Object,
            actual: other.kind(),
        }
        .into()),
    }
}

/// A list of dynamic values. Absent and `null` both mean empty.
pub(crate) fn values_or_empty<C: Cursor>(fields: &Fields<C>, key: &str) -> Result<Vec<Value>> {
    let Some(items) = fields.optional_array(key)? else {
        return Ok(Vec::new());
    };
    items
        .iter()
        .map(|item| search_value::decode(item).map_err(Into::into))
        .collect()
}
