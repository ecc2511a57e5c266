//! Error types for the linq-seq crate.

use thiserror::Error;

/// Errors returned by the fallible element accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The sequence has no elements.
    #[error("sequence is empty")]
    Empty,

    /// A predicate was supplied and no element matched it.
    #[error("no element matches the predicate")]
    NotFound,

    /// Index outside `[0, len)`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: i128, len: usize },
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
