//! The `_source` option of get, search and update requests.
//!
//! The server accepts four shapes for the same option:
//!
//! - `false` / `true`: skip or fetch the whole document
//! - `"title"`: fetch one field (wildcards allowed)
//! - `["title", "tags.*"]`: fetch several fields
//! - `{"includes": [..], "excludes": [..]}`: include and exclude patterns
//!
//! [`SourceFilter`] models all four and encodes back to the most compact one.

use log::trace;
use search_value::{wrong_kind, Cursor, Fields, Kind};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFilter {
    Fetch(bool),
    Includes(Vec<String>),
    Filter {
        includes: Vec<String>,
        excludes: Vec<String>,
    },
}

impl SourceFilter {
    /// Only the fields matching `patterns`.
    pub fn includes<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Includes(patterns.into_iter().map(Into::into).collect())
    }

    /// Everything except the fields matching `patterns`.
    pub fn excludes<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Filter {
            includes: Vec::new(),
            excludes: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Decode any of the accepted shapes.
    pub fn from_cursor<C: Cursor>(cursor: &C) -> Result<Self> {
        if let Some(fetch) = cursor.decode_bool() {
            return Ok(Self::Fetch(fetch));
        }
        if cursor.decode_string().is_some() || cursor.indexed().is_some() {
            return Ok(Self::Includes(patterns(cursor)?));
        }
        if cursor.keyed().is_none() {
            return Err(wrong_kind(cursor, Kind::Object).into());
        }

        let fields = Fields::from_cursor(cursor)?;
        Ok(Self::Filter {
            includes: pattern_field(&fields, "includes", "include")?,
            excludes: pattern_field(&fields, "excludes", "exclude")?,
        })
    }
}

/// `key`, or its singular legacy spelling. Absent means no patterns.
fn pattern_field<C: Cursor>(fields: &Fields<C>, key: &str, legacy: &str) -> Result<Vec<String>> {
    let cursor = match (fields.get(key), fields.get(legacy)) {
        (Some(cursor), _) => cursor,
        (None, Some(cursor)) => {
            trace!("source filter at {} uses legacy `{legacy}` key", fields.path());
            cursor
        }
        (None, None) => return Ok(Vec::new()),
    };
    patterns(cursor)
}

/// A single pattern string or an array of them.
fn patterns<C: Cursor>(cursor: &C) -> Result<Vec<String>> {
    if let Some(single) = cursor.decode_string() {
        return Ok(vec![single]);
    }
    let elements = cursor.indexed().ok_or_else(|| wrong_kind(cursor, Kind::Array))?;
    elements
        .map(|element| {
            element
                .decode_string()
                .ok_or_else(|| ModelError::from(wrong_kind(&element, Kind::String)))
        })
        .collect()
}

impl Serialize for SourceFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SourceFilter::Fetch(fetch) => serializer.serialize_bool(*fetch),
            SourceFilter::Includes(patterns) if patterns.len() == 1 => serializer.serialize_str(&patterns[0]),
            SourceFilter::Includes(patterns) => patterns.serialize(serializer),
            SourceFilter::Filter { includes, excludes } => {
                let len = usize::from(!includes.is_empty()) + usize::from(!excludes.is_empty());
                let mut map = serializer.serialize_map(Some(len))?;
                if !includes.is_empty() {
                    map.serialize_entry("includes", includes)?;
                }
                if !excludes.is_empty() {
                    map.serialize_entry("excludes", excludes)?;
                }
                map.end()
            }
        }
    }
}
