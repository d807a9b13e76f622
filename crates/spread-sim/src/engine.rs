//! The `Simulation` struct and its timestep loop.

use spread_core::{Point2, SimParams, SimRng};
use spread_graph::Graph;

use crate::state::StateStore;
use crate::trace::{AdoptionPoint, EdgeLine, NodeColor, NodeFrame, Trace};
use crate::utility::utility;
use crate::{SimError, SimObserver, SimResult};

/// One adoption-diffusion run over a fixed graph.
///
/// Owns all mutable run state (`StateStore`, `SimRng`); the graph is
/// borrowed read-only and can be shared across sequential runs.
/// Construction validates the configuration and performs the bootstrap
/// initialization, so a `Simulation` value always represents a valid
/// timestep-0 state.
pub struct Simulation<'g> {
    /// Topology.  Immutable for the duration of the run.
    pub graph: &'g Graph,

    /// Validated run configuration.
    pub params: SimParams,

    /// Per-node adoption state, mutated in place once per timestep.
    pub states: StateStore,

    /// The run's single seeded generator.  Fully consumed during
    /// initialization; kept so future stochastic extensions draw from
    /// the same stream.
    pub rng: SimRng,

    /// Index of the current state, 0-based.  `step()` advances it.
    pub timestep: u32,
}

impl<'g> Simulation<'g> {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `params`, reject empty topologies, and initialize node
    /// state (timestep 0).
    pub fn new(graph: &'g Graph, params: SimParams) -> SimResult<Self> {
        params.validate()?;
        if graph.is_empty() {
            return Err(SimError::EmptyGraph);
        }

        let mut rng = SimRng::new(params.seed);
        let states = StateStore::init(graph, &params, &mut rng);

        Ok(Self { graph, params, states, rng, timestep: 0 })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the bootstrap state through the final timestep and
    /// assemble the full trace.
    ///
    /// `positions` must hold one layout coordinate per node; it is read
    /// once per timestep for frame emission and never influences the
    /// update rule.  Consumes the simulation — a finished run's state
    /// is only reachable through the returned [`Trace`].
    pub fn run<O: SimObserver>(
        mut self,
        positions: &[Point2],
        observer: &mut O,
    ) -> SimResult<Trace> {
        let n = self.graph.node_count();
        if positions.len() != n {
            return Err(SimError::LayoutMismatch { expected: n, got: positions.len() });
        }

        let mut trace = Trace::with_capacity(self.params.timesteps, n, self.graph.edge_count());

        // Edge records are static: emitted once, independent of timestep.
        for &(a, b) in self.graph.edges() {
            trace
                .edges
                .push(EdgeLine::new(positions[a.index()], positions[b.index()]));
        }

        // Timestep 0 is the bootstrap state.  The recorded percentage is
        // the configured fraction as-is, not the floored count over n.
        self.record_frames(positions, &mut trace);
        trace.percentages.push(AdoptionPoint {
            timestep: 0,
            percentage: self.params.bootstrap,
        });
        observer.on_step_end(0, self.states.adopted_count());

        while self.timestep + 1 < self.params.timesteps {
            self.step();
            self.record_frames(positions, &mut trace);

            let adopted = self.states.adopted_count();
            trace.percentages.push(AdoptionPoint {
                timestep: self.timestep,
                percentage: adopted as f64 / n as f64,
            });
            observer.on_step_end(self.timestep, adopted);
        }

        observer.on_run_end(&trace);
        Ok(trace)
    }

    /// Advance the simulation by one timestep.
    ///
    /// The update is synchronous: every node's decision reads only the
    /// start-of-step snapshot, so within-step updates never leak into
    /// another node's `known_people` or into `network_size`.
    pub fn step(&mut self) {
        let snapshot = self.states.on_platform.clone();
        let network_size = snapshot.iter().filter(|&&on| on).count();

        for node in self.graph.node_ids() {
            let known = self
                .graph
                .neighbors(node)
                .iter()
                .filter(|m| snapshot[m.index()])
                .count() as u32;
            self.states.known_people[node.index()] = known;

            let u = utility(&self.params, network_size, known);
            let i = node.index();
            // The rule is evaluated fresh every step: a prior adopter
            // whose recomputed U is exactly 0 (== its reset cost)
            // reverts to off-platform.
            if u > self.states.transition_cost[i] {
                self.states.on_platform[i] = true;
                self.states.transition_cost[i] = 0.0;
            } else {
                self.states.on_platform[i] = false;
            }
        }

        self.timestep += 1;
    }

    // ── Trace assembly ────────────────────────────────────────────────────

    /// Append one frame per node for the current timestep.
    fn record_frames(&self, positions: &[Point2], trace: &mut Trace) {
        for node in self.graph.node_ids() {
            let p = positions[node.index()];
            trace.node_frames.push(NodeFrame {
                x: p.x,
                y: p.y,
                timestep: self.timestep,
                color: NodeColor::from_adopted(self.states.is_adopted(node)),
            });
        }
    }
}
