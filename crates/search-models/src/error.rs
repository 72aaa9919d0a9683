//! Error types for model decoding.

use search_value::{Path, ValueError};
use thiserror::Error;

/// Errors that can occur while decoding a response model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A field was missing, of the wrong kind, or not valid JSON at all.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A string field held a value outside its known set.
    #[error("unknown {what} {found:?} at {path}")]
    UnknownVariant {
        path: Path,
        what: &'static str,
        found: String,
    },
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Value(ValueError::Json(err))
    }
}

/// Convenience alias used throughout search-models.
pub type Result<T> = std::result::Result<T, ModelError>;
