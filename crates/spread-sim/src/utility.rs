//! The adoption utility function.
//!
//! A node weighs three benefits of joining the platform:
//!
//! - `g1(network_size) = ln(1 + network_size)` — everyone already on it,
//! - `g2(known_people) = ln(1 + known_people)` — its own neighbors on it,
//! - `g3(subsidy) = subsidy` — whatever the platform pays to join.
//!
//! The logarithms give diminishing returns in both network terms; the
//! subsidy enters linearly.

use spread_core::SimParams;

/// Diminishing-returns benefit of total platform size.
#[inline]
pub fn network_effect(network_size: usize) -> f64 {
    (1.0 + network_size as f64).ln()
}

/// Diminishing-returns benefit of adopted neighbors.
#[inline]
pub fn local_effect(known_people: u32) -> f64 {
    (1.0 + f64::from(known_people)).ln()
}

/// The full utility `U` a node compares against its transition cost.
///
/// `network_size` and `known_people` must both come from the same
/// start-of-timestep snapshot.
#[inline]
pub fn utility(params: &SimParams, network_size: usize, known_people: u32) -> f64 {
    params.w1 * network_effect(network_size)
        + params.w2 * local_effect(known_people)
        + params.w3 * params.subsidy
}
