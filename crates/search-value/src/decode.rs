//! Decode Adapter: builds a [`Value`] tree from a [`Cursor`].
//!
//! A cursor is positioned at one value of some structured source and answers
//! typed questions about it: "are you null?", "are you an integer?", "give me
//! your elements". Each question is a hard type check against the source and
//! never consumes anything, so the decoder can ask them one after another.
//!
//! # Trial order
//!
//! 1. Scalars: null, bool, integer, double, string. Integer is asked before
//!    double, so `1` becomes `Int(1)` while `1.0`, `1e3` and integers outside
//!    the `i64` range become `Double`.
//! 2. Indexed container → `Array`, elements decoded recursively.
//! 3. Keyed container → `Object`, source key order kept.
//! 4. Nothing matched → [`ValueError::Malformed`] naming the cursor's path.
//!
//! Reordering these trials changes observable results.

use crate::error::{Result, ValueError};
use crate::path::Path;
use crate::value::{Kind, Map, Value};

/// Containers nested deeper than this are rejected by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A read-only position inside a structured source.
///
/// Every method is a fallible probe: `None` (or `false`) means "not this kind",
/// and leaves the cursor usable for the next probe.
pub trait Cursor: Sized {
    /// Child cursors of an indexed container, in order.
    type Elements: Iterator<Item = Self>;
    /// `(key, child cursor)` pairs of a keyed container, in source order.
    type Entries: Iterator<Item = (String, Self)>;

    /// Location of this cursor from the document root.
    fn path(&self) -> &Path;

    fn decode_null(&self) -> bool;
    fn decode_bool(&self) -> Option<bool>;
    /// Only succeeds for numbers with no fraction or exponent that fit in an `i64`.
    fn decode_i64(&self) -> Option<i64>;
    /// Any number, including integral ones.
    fn decode_f64(&self) -> Option<f64>;
    fn decode_string(&self) -> Option<String>;

    fn indexed(&self) -> Option<Self::Elements>;
    fn keyed(&self) -> Option<Self::Entries>;

    /// Classify the cursor using the same trial order as [`Decoder`].
    /// `None` if the cursor answers no to every probe.
    fn kind(&self) -> Option<Kind> {
        if self.decode_null() {
            Some(Kind::Null)
        } else if self.decode_bool().is_some() {
            Some(Kind::Bool)
        } else if self.decode_i64().is_some() {
            Some(Kind::Int)
        } else if self.decode_f64().is_some() {
            Some(Kind::Double)
        } else if self.decode_string().is_some() {
            Some(Kind::String)
        } else if self.indexed().is_some() {
            Some(Kind::Array)
        } else if self.keyed().is_some() {
            Some(Kind::Object)
        } else {
            None
        }
    }
}

/// Turns cursors into [`Value`] trees.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit container nesting. Deeper input fails with [`ValueError::TooDeep`].
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn decode<C: Cursor>(&self, cursor: &C) -> Result<Value> {
        self.decode_at(cursor, 0)
    }

    fn decode_at<C: Cursor>(&self, cursor: &C, depth: usize) -> Result<Value> {
        if let Some(scalar) = decode_scalar(cursor) {
            return Ok(scalar);
        }

        if let Some(elements) = cursor.indexed() {
            self.enter(cursor, depth)?;
            let items = elements
                .map(|element| self.decode_at(&element, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            return Ok(Value::Array(items));
        }

        if let Some(entries) = cursor.keyed() {
            self.enter(cursor, depth)?;
            let mut map = Map::new();
            for (key, child) in entries {
                let value = self.decode_at(&child, depth + 1)?;
                map.insert(key, value);
            }
            return Ok(Value::Object(map));
        }

        Err(ValueError::Malformed {
            path: cursor.path().clone(),
        })
    }

    fn enter<C: Cursor>(&self, cursor: &C, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            return Err(ValueError::TooDeep {
                path: cursor.path().clone(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

fn decode_scalar<C: Cursor>(cursor: &C) -> Option<Value> {
    if cursor.decode_null() {
        return Some(Value::Null);
    }
    if let Some(b) = cursor.decode_bool() {
        return Some(Value::Bool(b));
    }
    if let Some(i) = cursor.decode_i64() {
        return Some(Value::Int(i));
    }
    if let Some(f) = cursor.decode_f64() {
        return Some(Value::Double(f));
    }
    cursor.decode_string().map(Value::String)
}

/// Decode with the default [`Decoder`].
pub fn decode<C: Cursor>(cursor: &C) -> Result<Value> {
    Decoder::default().decode(cursor)
}

/// The error for a cursor that is present but not of the `expected` kind:
/// `WrongType` with the observed kind, or `Malformed` if it has none.
pub fn wrong_kind<C: Cursor>(cursor: &C, expected: Kind) -> ValueError {
    let path = cursor.path().clone();
    match cursor.kind() {
        Some(actual) => ValueError::WrongType {
            path,
            expected,
            actual,
        },
        None => ValueError::Malformed { path },
    }
}
