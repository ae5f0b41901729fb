use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced by value conversions.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("expected an object, got {kind}")]
    NotAnObject { kind: ValueKind },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for conversion results.
pub type TypeResult<T> = Result<T, TypeError>;
