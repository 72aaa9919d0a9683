//! Search response, hits and totals.

use log::{debug, trace};
use search_value::{wrong_kind, Cursor, Fields, Kind, Map, Value};
use serde::Serialize;

use crate::decode::{object_or_empty, values_or_empty, FromFields};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub took: i64,
    pub timed_out: bool,
    #[serde(rename = "_scroll_id", skip_serializing_if = "Option::is_none")]
    pub scroll_id: Option<String>,
    pub hits: Hits,
    /// Aggregation results keep whatever shape the request asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hits {
    /// `None` when total hit tracking was disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<TotalHits>,
    pub max_score: Option<f64>,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalHits {
    pub value: i64,
    pub relation: TotalRelation,
}

/// Whether [`TotalHits::value`] is exact or a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalRelation {
    Eq,
    Gte,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    /// `None` when sorting by something other than score.
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub fields: Map,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<Value>,
}

impl FromFields for SearchResponse {
    fn from_fields<C: Cursor>(fields: &Fields<C>) -> Result<Self> {
        let response = Self {
            took: fields.require_i64("took")?,
            timed_out: fields.require_bool("timed_out")?,
            scroll_id: fields.optional_str("_scroll_id")?,
            hits: Hits::from_fields(&fields.require_fields("hits")?)?,
            aggregations: fields.optional_value("aggregations")?,
        };
        debug!(
            "decoded search response: {} hits in {}ms (timed out: {})",
            response.hits.hits.len(),
            response.took,
            response.timed_out
        );
        Ok(response)
    }
}

impl FromFields for Hits {
    fn from_fields<C: Cursor>(fields: &Fields<C>) -> Result<Self> {
        let total = match fields.get("total") {
            Some(cursor) if !cursor.decode_null() => Some(TotalHits::from_cursor(cursor)?),
            _ => None,
        };
        let hits = fields
            .require_array("hits")?
            .iter()
            .map(Hit::from_cursor)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            total,
            max_score: fields.optional_f64("max_score")?,
            hits,
        })
    }
}

impl TotalHits {
    /// Accepts the bare count of older servers as well as `{value, relation}`.
    pub fn from_cursor<C: Cursor>(cursor: &C) -> Result<Self> {
        if let Some(value) = cursor.decode_i64() {
            trace!("total hits at {} given as a bare count", cursor.path());
            return Ok(Self {
                value,
                relation: TotalRelation::Eq,
            });
        }
        if cursor.keyed().is_none() {
            return Err(wrong_kind(cursor, Kind::Object).into());
        }

        let fields = Fields::from_cursor(cursor)?;
        let relation = match fields.require_str("relation")?.as_str() {
            "eq" => TotalRelation::Eq,
            "gte" => TotalRelation::Gte,
            other => {
                return Err(ModelError::UnknownVariant {
                    path: fields.path().key("relation"),
                    what: "total hits relation",
                    found: other.to_owned(),
                })
            }
        };
        Ok(Self {
            value: fields.require_i64("value")?,
            relation,
        })
    }
}

impl FromFields for Hit {
    fn from_fields<C: Cursor>(fields: &Fields<C>) -> Result<Self> {
        Ok(Self {
            index: fields.require_str("_index")?,
            id: fields.require_str("_id")?,
            score: fields.optional_f64("_score")?,
            source: fields.optional_value("_source")?,
            fields: object_or_empty(fields, "fields")?,
            sort: values_or_empty(fields, "sort")?,
        })
    }
}
