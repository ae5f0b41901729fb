//! Error types for the merge crate.

use utilkit_types::ValueKind;

/// Errors that can occur during a merge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// An argument was not a plain object. `position` is zero for the
    /// destination and `n` for the n-th source.
    #[error("sources must be objects, not {} (argument {position})", .kind.plural())]
    InvalidArgumentKind { position: usize, kind: ValueKind },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
