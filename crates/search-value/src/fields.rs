//! Typed Accessors: pull specific fields out of a keyed container.
//!
//! Hand-written models mix fixed fields with dynamic bags. Instead of decoding
//! the whole container into a [`Value`] and then digging through it, a model
//! wraps the container in [`Fields`] and asks for what it needs:
//!
//! ```rust
//! use search_value::{Fields, JsonCursor, ValueError};
//!
//! let doc = serde_json::json!({"source": "ctx._source.n += 1", "lang": "painless"});
//! let fields = Fields::from_cursor(&JsonCursor::new(&doc)).unwrap();
//! assert_eq!(fields.require_str("source").unwrap(), "ctx._source.n += 1");
//! assert_eq!(fields.optional_str("id").unwrap(), None);
//!
//! let err = fields.require_i64("lang").unwrap_err();
//! assert!(matches!(err, ValueError::WrongType { .. }));
//! ```
//!
//! `require*` fails with [`ValueError::MissingField`] when the key is absent and
//! [`ValueError::WrongType`] when it holds something else. `optional*` returns
//! `None` for an absent key or an explicit `null`, and still fails with
//! `WrongType` for any other mismatch. [`Fields::optional_value`] is the one
//! exception to the null rule: it keeps `null` as `Some(Value::Null)`.

use indexmap::IndexMap;

use crate::decode::{decode, wrong_kind, Cursor};
use crate::error::{Result, ValueError};
use crate::path::Path;
use crate::value::{Kind, Value};

/// A scalar type that a [`Fields`] accessor can extract.
pub trait Scalar: Sized {
    /// The kind reported in `WrongType` errors.
    const KIND: Kind;

    fn read<C: Cursor>(cursor: &C) -> Option<Self>;
}

impl Scalar for String {
    const KIND: Kind = Kind::String;

    fn read<C: Cursor>(cursor: &C) -> Option<Self> {
        cursor.decode_string()
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn read<C: Cursor>(cursor: &C) -> Option<Self> {
        cursor.decode_bool()
    }
}

impl Scalar for i64 {
    const KIND: Kind = Kind::Int;

    fn read<C: Cursor>(cursor: &C) -> Option<Self> {
        cursor.decode_i64()
    }
}

/// Integral numbers are accepted too.
impl Scalar for f64 {
    const KIND: Kind = Kind::Double;

    fn read<C: Cursor>(cursor: &C) -> Option<Self> {
        cursor.decode_f64()
    }
}

/// The entries of one keyed container, addressable by key.
#[derive(Debug, Clone)]
pub struct Fields<C> {
    path: Path,
    entries: IndexMap<String, C>,
}

impl<C: Cursor> Fields<C> {
    /// Open `cursor` as a keyed container.
    pub fn from_cursor(cursor: &C) -> Result<Self> {
        let entries = cursor
            .keyed()
            .ok_or_else(|| wrong_kind(cursor, Kind::Object))?
            .collect();
        Ok(Self {
            path: cursor.path().clone(),
            entries,
        })
    }

    /// Location of the container itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&C> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn required(&self, key: &str) -> Result<&C> {
        self.entries.get(key).ok_or_else(|| ValueError::MissingField {
            path: self.path.key(key),
        })
    }

    /// Present and not `null`.
    fn present(&self, key: &str) -> Option<&C> {
        self.entries.get(key).filter(|cursor| !cursor.decode_null())
    }

    pub fn require<T: Scalar>(&self, key: &str) -> Result<T> {
        let cursor = self.required(key)?;
        T::read(cursor).ok_or_else(|| wrong_kind(cursor, T::KIND))
    }

    pub fn optional<T: Scalar>(&self, key: &str) -> Result<Option<T>> {
        self.present(key)
            .map(|cursor| T::read(cursor).ok_or_else(|| wrong_kind(cursor, T::KIND)))
            .transpose()
    }

    pub fn require_str(&self, key: &str) -> Result<String> {
        self.require(key)
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<String>> {
        self.optional(key)
    }

    pub fn require_bool(&self, key: &str) -> Result<bool> {
        self.require(key)
    }

    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>> {
        self.optional(key)
    }

    pub fn require_i64(&self, key: &str) -> Result<i64> {
        self.require(key)
    }

    pub fn optional_i64(&self, key: &str) -> Result<Option<i64>> {
        self.optional(key)
    }

    pub fn require_f64(&self, key: &str) -> Result<f64> {
        self.require(key)
    }

    pub fn optional_f64(&self, key: &str) -> Result<Option<f64>> {
        self.optional(key)
    }

    /// Decode the whole field as a [`Value`]; `null` is a valid result.
    pub fn require_value(&self, key: &str) -> Result<Value> {
        decode(self.required(key)?)
    }

    /// `None` only when the key is absent. An explicit `null` is `Some(Value::Null)`.
    pub fn optional_value(&self, key: &str) -> Result<Option<Value>> {
        self.entries.get(key).map(decode).transpose()
    }

    /// A nested keyed container.
    pub fn require_fields(&self, key: &str) -> Result<Fields<C>> {
        Fields::from_cursor(self.required(key)?)
    }

    pub fn optional_fields(&self, key: &str) -> Result<Option<Fields<C>>> {
        self.present(key).map(Fields::from_cursor).transpose()
    }

    /// The elements of an indexed container, as cursors.
    pub fn require_array(&self, key: &str) -> Result<Vec<C>> {
        let cursor = self.required(key)?;
        elements(cursor)
    }

    pub fn optional_array(&self, key: &str) -> Result<Option<Vec<C>>> {
        self.present(key).map(elements).transpose()
    }
}

fn elements<C: Cursor>(cursor: &C) -> Result<Vec<C>> {
    cursor
        .indexed()
        .map(Iterator::collect)
        .ok_or_else(|| wrong_kind(cursor, Kind::Array))
}
