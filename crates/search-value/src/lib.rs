//! # search-value
//!
//! Schema-less structured value for search engine client models.
//!
//! Request and response documents of a search engine mix fixed, strongly typed
//! fields with fragments whose shape is only known at runtime: script parameters,
//! `_source` documents, `fields` bags, sort values. [`Value`] carries those
//! fragments through the otherwise typed serialization pipeline.
//!
//! ## Quick start
//!
//! ```rust
//! use search_value::{from_str, to_string, Value};
//!
//! let value = from_str(r#"{"count":1,"ratio":1.0,"tags":["a","b"]}"#).unwrap();
//! assert_eq!(value.get("count"), Some(&Value::Int(1)));
//! assert_eq!(value.get("ratio"), Some(&Value::Double(1.0)));
//!
//! // Key order survives the round trip.
//! assert_eq!(to_string(&value).unwrap(), r#"{"count":1,"ratio":1.0,"tags":["a","b"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] sum type, [`Kind`] and typed views
//! - [`eq`] — structural equality and order-independent hashing
//! - [`decode`] — [`Cursor`] abstraction and the trial-order [`Decoder`]
//! - [`de`] — `serde::Deserialize` for [`Value`] and the [`de::present`] field helper
//! - [`encode`] — `serde::Serialize` for [`Value`] with path-tagged sink errors
//! - [`fields`] — typed accessors over keyed containers ([`Fields`])
//! - [`json`] — `serde_json` backed cursor and text helpers
//! - [`path`] — locations inside a document ([`Path`])
//! - [`error`] — error types

pub mod de;
pub mod decode;
pub mod encode;
pub mod eq;
pub mod error;
pub mod fields;
mod from;
pub mod json;
pub mod path;
pub mod value;

pub use decode::{decode, wrong_kind, Cursor, Decoder, DEFAULT_MAX_DEPTH};
pub use encode::{encode, EncodeError};
pub use error::{Result, ValueError};
pub use fields::{Fields, Scalar};
pub use json::{from_json, from_slice, from_str, to_string, to_string_pretty, to_vec, to_writer, JsonCursor};
pub use path::{Path, Segment};
pub use value::{Kind, Map, Value, WrongVariant};
