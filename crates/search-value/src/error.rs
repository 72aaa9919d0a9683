//! Error types for decoding, accessing and encoding values.

use thiserror::Error;

use crate::path::Path;
use crate::value::Kind;

/// Errors that can occur while decoding, accessing or encoding a [`Value`](crate::Value).
#[derive(Error, Debug)]
pub enum ValueError {
    /// The cursor was neither a scalar, an indexed container nor a keyed container.
    #[error("malformed value at {path}")]
    Malformed { path: Path },

    /// A value was present but of a different kind than requested.
    #[error("wrong type at {path}: expected {expected}, found {actual}")]
    WrongType {
        path: Path,
        expected: Kind,
        actual: Kind,
    },

    /// A required entry was absent from its keyed container.
    #[error("missing field {path}")]
    MissingField { path: Path },

    /// Containers nested deeper than the decoder allows.
    #[error("nesting deeper than {limit} levels at {path}")]
    TooDeep { path: Path, limit: usize },

    /// The output sink failed while writing the value at `path`.
    #[error("encoding error at {path}: {source}")]
    Encode {
        path: Path,
        #[source]
        source: serde_json::Error,
    },

    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValueError {
    /// The document location this error refers to, if it has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ValueError::Malformed { path }
            | ValueError::WrongType { path, .. }
            | ValueError::MissingField { path }
            | ValueError::TooDeep { path, .. }
            | ValueError::Encode { path, .. } => Some(path),
            ValueError::Json(_) => None,
        }
    }
}

/// Convenience alias used throughout search-value.
pub type Result<T> = std::result::Result<T, ValueError>;
