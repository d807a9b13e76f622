//! Standard topology generators.
//!
//! These cover the topologies the adoption model is usually run on: a
//! 2-D lattice (dense local neighborhoods), a Barabási–Albert
//! scale-free network (hubs), and a cycle (minimal connected
//! baseline).  Anything else can be assembled with [`GraphBuilder`]
//! directly.

use rustc_hash::FxHashSet;

use spread_core::{NodeId, SimRng};

use crate::{Graph, GraphBuilder, GraphError, GraphResult};

/// 2-D lattice with `rows * cols` nodes and 4-neighborhood edges.
///
/// Node `(r, c)` has id `r * cols + c`.  A `rows` or `cols` of zero
/// yields an empty graph (the engine rejects it at run time).
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut b = GraphBuilder::with_capacity(2 * rows * cols);
    b.add_nodes(rows * cols);
    let id = |r: usize, c: usize| NodeId((r * cols + c) as u32);
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                b.add_edge(id(r, c), id(r, c + 1));
            }
            if r + 1 < rows {
                b.add_edge(id(r, c), id(r + 1, c));
            }
        }
    }
    b.build()
}

/// Ring of `n >= 3` nodes: `0-1-2-…-(n-1)-0`.
pub fn cycle(n: usize) -> GraphResult<Graph> {
    if n < 3 {
        return Err(GraphError::CycleTooSmall(n));
    }
    let mut b = GraphBuilder::with_capacity(n);
    b.add_nodes(n);
    for i in 0..n {
        b.add_edge(NodeId(i as u32), NodeId(((i + 1) % n) as u32));
    }
    Ok(b.build())
}

/// Barabási–Albert preferential-attachment network.
///
/// Starts from `m` isolated seed nodes; every further node attaches
/// `m` edges to existing nodes chosen proportionally to their current
/// degree.  The repeated-nodes list makes degree-proportional sampling
/// a uniform draw; a target set keeps each new node's `m` attachments
/// distinct.
///
/// Deterministic for a given `rng` state.  Requires `1 <= m < n`.
pub fn barabasi_albert(n: usize, m: usize, rng: &mut SimRng) -> GraphResult<Graph> {
    if m == 0 || m >= n {
        return Err(GraphError::InvalidAttachment { n, m });
    }

    let mut b = GraphBuilder::with_capacity((n - m) * m);
    b.add_nodes(n);

    // Each node appears in `repeated` once per incident edge, so a
    // uniform index draw is a degree-proportional node draw.
    let mut repeated: Vec<NodeId> = Vec::with_capacity(2 * (n - m) * m);
    let mut targets: Vec<NodeId> = (0..m as u32).map(NodeId).collect();
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();

    for source in m..n {
        // The first source attaches to all seed nodes; later sources
        // draw m distinct, degree-proportional targets.
        if source > m {
            seen.clear();
            targets.clear();
            while targets.len() < m {
                let pick = repeated[rng.gen_range(0..repeated.len())];
                if seen.insert(pick) {
                    targets.push(pick);
                }
            }
        }

        let source = NodeId(source as u32);
        for &t in &targets {
            b.add_edge(source, t);
        }
        repeated.extend_from_slice(&targets);
        repeated.extend(std::iter::repeat(source).take(m));
    }

    Ok(b.build())
}
