//! The recorded output of a simulation run.
//!
//! A `Trace` is created fresh per run, returned by value, and never
//! mutated afterwards — ownership passes entirely to whatever consumes
//! it (a chart renderer, a CSV writer, a test).  The engine holds no
//! state between runs.

use spread_core::Point2;

// ── NodeColor ─────────────────────────────────────────────────────────────────

/// Categorical adoption color, derived purely from `on_platform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeColor {
    Adopted,
    NotAdopted,
}

impl NodeColor {
    #[inline]
    pub fn from_adopted(on_platform: bool) -> Self {
        if on_platform { NodeColor::Adopted } else { NodeColor::NotAdopted }
    }

    /// Stable label for output files and chart encodings.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeColor::Adopted => "adopted",
            NodeColor::NotAdopted => "not_adopted",
        }
    }
}

impl std::fmt::Display for NodeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Row types ─────────────────────────────────────────────────────────────────

/// One node's rendered state at one timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeFrame {
    pub x: f32,
    pub y: f32,
    pub timestep: u32,
    pub color: NodeColor,
}

/// Endpoint coordinates of one undirected edge.  Emitted once per run;
/// topology and layout do not change mid-run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl EdgeLine {
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { x1: a.x, y1: a.y, x2: b.x, y2: b.y }
    }
}

/// One point of the adoption-percentage time series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdoptionPoint {
    pub timestep: u32,
    /// Fraction of nodes on the platform, in [0, 1].  At timestep 0
    /// this is the configured bootstrap fraction as-is.
    pub percentage: f64,
}

// ── Trace ─────────────────────────────────────────────────────────────────────

/// The complete recorded output of one run.
///
/// `node_frames` is ordered by timestep, then node: exactly
/// `node_count` frames per timestep, `timesteps` timesteps total.
/// `percentages` has exactly `timesteps` entries with strictly
/// increasing timestep indices starting at 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub node_frames: Vec<NodeFrame>,
    pub edges: Vec<EdgeLine>,
    pub percentages: Vec<AdoptionPoint>,
    /// Frames per timestep — the node count of the simulated graph.
    pub node_count: usize,
}

impl Trace {
    pub(crate) fn with_capacity(timesteps: u32, node_count: usize, edge_count: usize) -> Self {
        Self {
            node_frames: Vec::with_capacity(timesteps as usize * node_count),
            edges: Vec::with_capacity(edge_count),
            percentages: Vec::with_capacity(timesteps as usize),
            node_count,
        }
    }

    /// Number of recorded timesteps.
    pub fn timesteps(&self) -> u32 {
        self.percentages.len() as u32
    }

    /// The contiguous frame slice for timestep `t`.
    ///
    /// # Panics
    /// Panics if `t` is outside the recorded range.
    pub fn frames_at(&self, t: u32) -> &[NodeFrame] {
        let start = t as usize * self.node_count;
        &self.node_frames[start..start + self.node_count]
    }

    /// Final adoption percentage of the run.
    pub fn final_percentage(&self) -> f64 {
        self.percentages.last().map(|p| p.percentage).unwrap_or(0.0)
    }
}
