//! Per-node simulation state in Structure-of-Arrays layout.
//!
//! Every `Vec` has exactly `count` elements; `NodeId` is the index
//! into all of them.  Keeping state out of the topology (no dynamic
//! per-node attribute maps) lets the same immutable `Graph` serve any
//! number of runs.

use spread_core::{NodeId, SimParams, SimRng};
use spread_graph::Graph;

/// SoA storage for all per-node adoption state.
pub struct StateStore {
    /// Number of nodes.  Equals the length of every array below.
    pub count: usize,

    /// Whether each node is currently on the platform.
    pub on_platform: Vec<bool>,

    /// Per-node adoption threshold.  Sampled once at init; reset to 0
    /// the moment the node adopts.
    pub transition_cost: Vec<f64>,

    /// Count of graph-neighbors on the platform.  Derived — recomputed
    /// from the start-of-step snapshot every timestep.
    pub known_people: Vec<u32>,
}

impl StateStore {
    /// Initialize state for every node of `graph`.
    ///
    /// Costs are drawn i.i.d. from `Uniform[lb, ub]` in ascending node
    /// order, then `floor(bootstrap · n)` distinct nodes are sampled
    /// without replacement as the seed cohort.  Both draws come from
    /// the caller's single `rng`, in that fixed order, so the whole
    /// initialization is reproducible from the seed alone.
    pub fn init(graph: &Graph, params: &SimParams, rng: &mut SimRng) -> Self {
        let count = graph.node_count();

        let transition_cost: Vec<f64> = (0..count)
            .map(|_| rng.gen_range(params.transition_lb..=params.transition_ub))
            .collect();

        let mut on_platform = vec![false; count];
        for idx in rng.sample_indices(count, params.bootstrap_count(count)) {
            on_platform[idx] = true;
        }

        Self {
            count,
            on_platform,
            transition_cost,
            known_people: vec![0; count],
        }
    }

    /// Nodes currently on the platform.
    #[inline]
    pub fn adopted_count(&self) -> usize {
        self.on_platform.iter().filter(|&&on| on).count()
    }

    /// `true` if `node` is currently on the platform.
    #[inline]
    pub fn is_adopted(&self, node: NodeId) -> bool {
        self.on_platform[node.index()]
    }
}
