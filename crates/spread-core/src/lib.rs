//! `spread-core` — foundational types for the `spread` adoption-diffusion
//! framework.
//!
//! This crate is a dependency of every other `spread-*` crate.  It has no
//! `spread-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`ids`]     | `NodeId`                                      |
//! | [`point`]   | `Point2` (layout coordinate)                  |
//! | [`rng`]     | `SimRng` (single seeded generator per run)    |
//! | [`params`]  | `SimParams` + validation                      |
//! | [`error`]   | `ParamError`, `ParamResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod params;
pub mod point;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ParamError, ParamResult};
pub use ids::NodeId;
pub use params::SimParams;
pub use point::Point2;
pub use rng::SimRng;
