//! `spread-graph` — undirected topology, generators, and layouts.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`graph`]    | `Graph` (CSR adjacency + unique edge list), `GraphBuilder` |
//! | [`generate`] | `grid`, `barabasi_albert`, `cycle` generators           |
//! | [`layout`]   | `LayoutProvider` trait, `GridLayout`, `SpringLayout`    |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                          |
//!
//! Topology is immutable after [`GraphBuilder::build`]; the simulation
//! engine only ever reads it.

pub mod error;
pub mod generate;
pub mod graph;
pub mod layout;


pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphBuilder};
pub use layout::{GridLayout, LayoutProvider, SpringLayout};
