//! Scripts with dynamic parameters.
//!
//! Script parameters are whatever the script author needs: numbers, strings,
//! nested maps. They are carried as [`Value`]s and encoded in insertion order.

use log::trace;
use search_value::{Cursor, Fields, Map, Value};
use serde::Serialize;

use crate::decode::{object_or_empty, FromFields};
use crate::error::Result;

/// An inline script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            lang: None,
            params: Map::new(),
        }
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Add or replace a parameter. Later calls keep the first call's position.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl FromFields for Script {
    fn from_fields<C: Cursor>(fields: &Fields<C>) -> Result<Self> {
        // Older servers spell the body `inline`.
        let source = if !fields.contains("source") && fields.contains("inline") {
            trace!("script at {} uses legacy `inline` key", fields.path());
            fields.require_str("inline")?
        } else {
            fields.require_str("source")?
        };

        Ok(Self {
            source,
            lang: fields.optional_str("lang")?,
            params: object_or_empty(fields, "params")?,
        })
    }
}
