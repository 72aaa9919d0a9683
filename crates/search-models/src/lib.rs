//! # search-models
//!
//! Request and response bodies of the search engine HTTP API that carry
//! schema-less fragments. Fixed fields are typed; everything whose shape is
//! only known at runtime (script parameters, `_source` documents, `fields`
//! bags, sort values) is a [`search_value::Value`].
//!
//! Request bodies encode through serde derive. Response bodies decode by hand
//! through [`search_value::Fields`], so a malformed response names the exact
//! field that was wrong.
//!
//! ```rust
//! use search_models::{from_str, GetResponse};
//!
//! let body = r#"{"_index":"events","_id":"42","_version":3,"found":true,"_source":{"title":"standup"}}"#;
//! let response: GetResponse = from_str(body).unwrap();
//! assert_eq!(response.id, "42");
//! assert_eq!(response.source.unwrap().get("title").unwrap().as_str().unwrap(), "standup");
//! ```
//!
//! ## Modules
//!
//! - [`decode`] — the [`FromFields`] trait and text entry points
//! - [`error`] — error types
//! - [`script`] — stored and inline scripts with dynamic `params`
//! - [`source`] — the `_source` filtering option
//! - [`update`] — partial-update request body
//! - [`get`] — single-document lookup response
//! - [`search`] — search response, hits and totals

pub mod decode;
pub mod error;
pub mod get;
pub mod script;
pub mod search;
pub mod source;
pub mod update;

pub use decode::{from_json, from_slice, from_str, FromFields};
pub use error::{ModelError, Result};
pub use get::GetResponse;
pub use script::Script;
pub use search::{Hit, Hits, SearchResponse, TotalHits, TotalRelation};
pub use source::SourceFilter;
pub use update::UpdateBody;
