//! Undirected graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! adj[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Each undirected edge appears twice in `adj` (once per endpoint), so
//! a node's known-people scan is a contiguous memory read — ideal for
//! the per-timestep update loop.
//!
//! Alongside the CSR arrays the graph keeps a deduplicated edge list
//! in normalized `(min, max)` order.  The trace assembler emits one
//! coordinate-pair record per entry, independent of timestep.

use spread_core::NodeId;

// ── Graph ─────────────────────────────────────────────────────────────────────

/// An immutable undirected graph in CSR format.
///
/// Do not construct directly; use [`GraphBuilder`] or one of the
/// generators in [`crate::generate`].
#[derive(Debug)]
pub struct Graph {
    /// CSR row pointer.  Neighbors of node `n` are at positions
    /// `adj_start[n] .. adj_start[n+1]`.  Length = `node_count + 1`.
    adj_start: Vec<u32>,

    /// Flat neighbor array.  Each undirected edge contributes two entries.
    adj: Vec<NodeId>,

    /// Unique undirected edges, normalized so `edge.0 < edge.1`, sorted.
    edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adj_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over all `NodeId`s in ascending index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    /// Neighbors of `node` as a contiguous slice — no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.adj_start[node.index()] as usize;
        let end = self.adj_start[node.index() + 1] as usize;
        &self.adj[start..end]
    }

    /// Degree of `node`.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// The unique undirected edge list, normalized and sorted.
    #[inline]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and undirected edges in any order.
/// `build()` normalizes, deduplicates, and sorts the edges, then
/// constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use spread_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let n0 = b.add_node();
/// let n1 = b.add_node();
/// let n2 = b.add_node();
/// b.add_edge(n0, n1);
/// b.add_edge(n1, n2);
/// let g = b.build();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.degree(n1), 2);
/// ```
pub struct GraphBuilder {
    node_count: usize,
    raw_edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { node_count: 0, raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected edge count to reduce reallocations
    /// when bulk-loading from a generator.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            node_count: 0,
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add `n` nodes at once; returns the id of the first.
    pub fn add_nodes(&mut self, n: usize) -> NodeId {
        let first = NodeId(self.node_count as u32);
        self.node_count += n;
        first
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Duplicate edges are collapsed at `build()` time.  Self-loops are
    /// rejected (the adoption model has no use for them).
    ///
    /// # Panics
    /// Panics in debug mode if `a == b` or either endpoint was not added.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b, "self-loop");
        debug_assert!(a.index() < self.node_count && b.index() < self.node_count);
        let edge = if a.0 <= b.0 { (a, b) } else { (b, a) };
        self.raw_edges.push(edge);
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, O(N + E) for CSR
    /// construction.
    pub fn build(self) -> Graph {
        let node_count = self.node_count;

        // Normalize happened at insert; sort + dedup gives the unique
        // edge list in a canonical order.
        let mut edges = self.raw_edges;
        edges.sort_unstable();
        edges.dedup();

        // Build the CSR row pointer from per-node degrees (each edge
        // counts for both endpoints).
        let mut adj_start = vec![0u32; node_count + 1];
        for &(a, b) in &edges {
            adj_start[a.index() + 1] += 1;
            adj_start[b.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }

        // Fill the flat neighbor array with a cursor per node.
        let mut adj = vec![NodeId::INVALID; edges.len() * 2];
        let mut cursor: Vec<u32> = adj_start[..node_count].to_vec();
        for &(a, b) in &edges {
            adj[cursor[a.index()] as usize] = b;
            cursor[a.index()] += 1;
            adj[cursor[b.index()] as usize] = a;
            cursor[b.index()] += 1;
        }
        debug_assert!(adj.iter().all(|&n| n != NodeId::INVALID));

        Graph { adj_start, adj, edges }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
