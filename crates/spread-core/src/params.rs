//! Simulation parameters and validation.
//!
//! `SimParams` is the immutable configuration for one run.  It is
//! typically filled in by the application crate (CLI flags, a config
//! file, UI sliders — all outside this workspace's scope) and handed
//! to `spread-sim`, which calls [`SimParams::validate`] before doing
//! any work.

use crate::{ParamError, ParamResult};

/// Immutable configuration for a single simulation run.
///
/// The utility a node computes each timestep is
///
/// ```text
/// U = w1 · ln(1 + network_size) + w2 · ln(1 + known_people) + w3 · subsidy
/// ```
///
/// and the node joins the platform iff `U` exceeds its transition cost.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Weight of the global network-size term.  Must be in [0, 1].
    pub w1: f64,

    /// Weight of the adopted-neighbors (known-people) term.  Must be in [0, 1].
    pub w2: f64,

    /// Weight of the platform-subsidy term.  Must be in [0, 1].
    pub w3: f64,

    /// Flat subsidy the platform pays every prospective user.
    pub subsidy: f64,

    /// Lower bound of the uniform transition-cost distribution.
    pub transition_lb: f64,

    /// Upper bound of the uniform transition-cost distribution.
    /// Must satisfy `transition_lb <= transition_ub`.
    pub transition_ub: f64,

    /// Fraction of nodes force-seeded as adopters at timestep 0.
    /// Must be in [0, 1]; the seeded count is `floor(bootstrap * n)`.
    pub bootstrap: f64,

    /// Fixed simulation horizon.  Must be positive; the run produces
    /// exactly this many adoption-percentage points (timestep 0 included).
    pub timesteps: u32,

    /// Master RNG seed.  The same seed always produces identical traces.
    pub seed: u64,
}

impl SimParams {
    /// Check every range constraint, failing fast on the first violation.
    ///
    /// Out-of-range values are errors, never clamped.
    pub fn validate(&self) -> ParamResult<()> {
        for (name, value) in [("w1", self.w1), ("w2", self.w2), ("w3", self.w3)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamError::WeightOutOfRange { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.bootstrap) {
            return Err(ParamError::BootstrapOutOfRange(self.bootstrap));
        }
        if self.transition_lb > self.transition_ub {
            return Err(ParamError::InvertedCostBounds {
                lb: self.transition_lb,
                ub: self.transition_ub,
            });
        }
        if self.timesteps == 0 {
            return Err(ParamError::ZeroTimesteps);
        }
        Ok(())
    }

    /// Number of bootstrap adopters for a graph of `node_count` nodes.
    #[inline]
    pub fn bootstrap_count(&self, node_count: usize) -> usize {
        (self.bootstrap * node_count as f64).floor() as usize
    }
}
