//! Encode Adapter: writes a [`Value`] tree to any serde serializer.
//!
//! Pure structural recursion, one case per variant: scalars are written
//! directly, arrays open a sequence and write each element in order, objects
//! open a map and write each entry in insertion order.
//!
//! A well formed tree always encodes; the only failures come from the sink
//! itself (a closed socket, a full buffer). [`encode`] hands those back
//! unchanged together with the path of the value being written.

use std::cell::RefCell;
use std::error::Error as StdError;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::path::{Path, Segment};
use crate::value::Value;

/// A sink error together with the location being written when it happened.
#[derive(Debug)]
pub struct EncodeError<E> {
    pub path: Path,
    pub source: E,
}

impl<E: fmt::Display> fmt::Display for EncodeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encoding error at {}: {}", self.path, self.source)
    }
}

impl<E: StdError + 'static> StdError for EncodeError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

/// Write `value` to `serializer`, tagging a sink failure with its path.
pub fn encode<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, EncodeError<S::Error>> {
    let failed = RefCell::new(None);
    let result = Tracked {
        value,
        trail: Trail::Root,
        failed: Some(&failed),
    }
    .serialize(serializer);
    result.map_err(|source| EncodeError {
        path: failed.take().unwrap_or_default(),
        source,
    })
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Tracked {
            value: self,
            trail: Trail::Root,
            failed: None,
        }
        .serialize(serializer)
    }
}

/// The way down from the root, kept on the stack and only turned into a
/// [`Path`] when a write fails.
#[derive(Clone, Copy)]
enum Trail<'a> {
    Root,
    Key(&'a Trail<'a>, &'a str),
    Index(&'a Trail<'a>, usize),
}

impl Trail<'_> {
    fn to_path(self) -> Path {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Trail::Root => break,
                Trail::Key(parent, key) => {
                    segments.push(Segment::Key(key.to_owned()));
                    current = *parent;
                }
                Trail::Index(parent, index) => {
                    segments.push(Segment::Index(index));
                    current = *parent;
                }
            }
        }
        segments.into_iter().rev().collect()
    }
}

struct Tracked<'a> {
    value: &'a Value,
    trail: Trail<'a>,
    /// Receives the deepest failing path. `None` when nobody asked for it.
    failed: Option<&'a RefCell<Option<Path>>>,
}

impl<'a> Tracked<'a> {
    fn child<'b>(&'b self, value: &'b Value, trail: Trail<'b>) -> Tracked<'b> {
        Tracked {
            value,
            trail,
            failed: self.failed,
        }
    }

    fn write<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Double(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for (index, item) in items.iter().enumerate() {
                    let trail = Trail::Index(&self.trail, index);
                    seq.serialize_element(&self.child(item, trail))?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    let trail = Trail::Key(&self.trail, key);
                    entries.serialize_entry(key, &self.child(item, trail))?;
                }
                entries.end()
            }
        }
    }
}

impl Serialize for Tracked<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let result = self.write(serializer);
        if result.is_err() {
            if let Some(slot) = self.failed {
                // Children fail first, so the first path recorded is the deepest.
                slot.borrow_mut().get_or_insert_with(|| self.trail.to_path());
            }
        }
        result
    }
}
