use spread_core::ParamError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid simulation parameters: {0}")]
    Params(#[from] ParamError),

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("layout has {got} positions but the graph has {expected} nodes")]
    LayoutMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;
