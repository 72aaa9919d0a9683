//! Response of a single-document lookup.

use log::debug;
use search_value::{Cursor, Fields, Map, Value};
use serde::Serialize;

use crate::decode::{object_or_empty, FromFields};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(rename = "_seq_no", skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i64>,
    #[serde(rename = "_primary_term", skip_serializing_if = "Option::is_none")]
    pub primary_term: Option<i64>,
    pub found: bool,
    /// `None` when the document was not found or `_source` was disabled.
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub fields: Map,
}

impl FromFields for GetResponse {
    fn from_fields<C: Cursor>(fields: &Fields<C>) -> Result<Self> {
        let response = Self {
            index: fields.require_str("_index")?,
            id: fields.require_str("_id")?,
            version: fields.optional_i64("_version")?,
            seq_no: fields.optional_i64("_seq_no")?,
            primary_term: fields.optional_i64("_primary_term")?,
            found: fields.require_bool("found")?,
            source: fields.optional_value("_source")?,
            fields: object_or_empty(fields, "fields")?,
        };
        debug!(
            "decoded get response {}/{} (found: {})",
            response.index, response.id, response.found
        );
        Ok(response)
    }
}
