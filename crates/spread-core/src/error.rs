//! Parameter validation errors.
//!
//! Invalid configuration is rejected before any simulation work, with
//! a descriptive error — values are never silently clamped.

use thiserror::Error;

/// A rejected simulation parameter.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("bootstrap fraction {0} is outside [0, 1]")]
    BootstrapOutOfRange(f64),

    #[error("weight {name} = {value} is outside [0, 1]")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("transition cost bounds are inverted: lowerbound {lb} > upperbound {ub}")]
    InvertedCostBounds { lb: f64, ub: f64 },

    #[error("timesteps must be positive")]
    ZeroTimesteps,
}

/// Alias for `Result<T, ParamError>`.
pub type ParamResult<T> = Result<T, ParamError>;
