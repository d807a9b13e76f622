//! `spread-sim` — the adoption-diffusion simulation engine.
//!
//! # The timestep loop
//!
//! ```text
//! init:  all off-platform; costs ~ Uniform[lb, ub]; floor(bootstrap·n)
//!        nodes sampled without replacement become the seed cohort
//! for t in 1..timesteps:
//!   ① Snapshot — start-of-step adoption flags and network size
//!   ② Utility  — U = w1·ln(1+network_size) + w2·ln(1+known_people)
//!                  + w3·subsidy, per node, from the snapshot only
//!   ③ Decide   — U > cost ⇒ adopt (cost drops to 0); else off-platform
//!   ④ Record   — n node frames + one adoption-percentage point
//! ```
//!
//! The update is synchronous: no node's step-`t` decision is visible
//! to another node until step `t+1`.  All randomness comes from one
//! `SimRng` seeded from `SimParams::seed`, so identical inputs yield
//! byte-identical traces.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use spread_graph::{generate, GridLayout, LayoutProvider};
//! use spread_sim::{NoopObserver, Simulation};
//!
//! let graph = generate::grid(32, 32);
//! let positions = GridLayout::new(32, 32).positions(&graph);
//! let trace = Simulation::new(&graph, params)?
//!     .run(&positions, &mut NoopObserver)?;
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod state;
pub mod trace;
pub mod utility;

#[cfg(test)]
mod tests;

pub use engine::Simulation;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use state::StateStore;
pub use trace::{AdoptionPoint, EdgeLine, NodeColor, NodeFrame, Trace};
