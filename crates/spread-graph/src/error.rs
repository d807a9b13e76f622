//! Graph construction errors.

use thiserror::Error;

/// Errors from graph generators.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("barabasi-albert attachment count {m} must satisfy 1 <= m < n (n = {n})")]
    InvalidAttachment { n: usize, m: usize },

    #[error("cycle graph needs at least 3 nodes, got {0}")]
    CycleTooSmall(usize),
}

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;
