//! Body of a partial document update.
//!
//! `doc` and `upsert` are arbitrary documents. `None` leaves the key out of
//! the body; `Some(Value::Null)` writes an explicit `null`, which the server
//! treats differently from a missing key.

use search_value::Value;
use serde::Serialize;

use crate::script::Script;
use crate::source::SourceFilter;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsert: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_as_upsert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripted_upsert: Option<bool>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceFilter>,
}

impl UpdateBody {
    /// Merge `doc` into the stored document.
    pub fn with_doc(doc: impl Into<Value>) -> Self {
        Self {
            doc: Some(doc.into()),
            ..Self::default()
        }
    }

    /// Run `script` against the stored document.
    pub fn with_script(script: Script) -> Self {
        Self {
            script: Some(script),
            ..Self::default()
        }
    }

    /// Document to index when the target does not exist yet.
    pub fn upsert(mut self, upsert: impl Into<Value>) -> Self {
        self.upsert = Some(upsert.into());
        self
    }

    /// Use `doc` as the upsert document.
    pub fn doc_as_upsert(mut self, enabled: bool) -> Self {
        self.doc_as_upsert = Some(enabled);
        self
    }

    /// Run the script even when the document does not exist yet.
    pub fn scripted_upsert(mut self, enabled: bool) -> Self {
        self.scripted_upsert = Some(enabled);
        self
    }

    /// Return (parts of) the updated source in the response.
    pub fn source(mut self, filter: SourceFilter) -> Self {
        self.source = Some(filter);
        self
    }
}
