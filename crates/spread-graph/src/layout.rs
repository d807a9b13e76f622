//! Layout providers: map each node to a stable 2-D coordinate.
//!
//! Layout is an output concern only — the simulation engine consumes
//! positions solely to stamp coordinates into the trace, never for the
//! update rule.  Positions are computed once per run and reused for
//! every timestep.

use spread_core::{Point2, SimRng};

use crate::Graph;

/// Maps every node of a graph to a 2-D coordinate.
///
/// Implementations must be deterministic: the same provider applied to
/// the same graph yields the same positions (randomized layouts own a
/// seed for this).  The returned `Vec` is indexed by `NodeId` and has
/// exactly `graph.node_count()` entries.
pub trait LayoutProvider {
    fn positions(&self, graph: &Graph) -> Vec<Point2>;
}

// ── GridLayout ────────────────────────────────────────────────────────────────

/// Identity layout for lattice graphs from [`crate::generate::grid`]:
/// node `r * cols + c` sits at `(r, c)`.
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl LayoutProvider for GridLayout {
    fn positions(&self, graph: &Graph) -> Vec<Point2> {
        debug_assert_eq!(graph.node_count(), self.rows * self.cols);
        (0..graph.node_count())
            .map(|i| Point2::new((i / self.cols) as f32, (i % self.cols) as f32))
            .collect()
    }
}

// ── SpringLayout ──────────────────────────────────────────────────────────────

/// Seeded Fruchterman–Reingold force-directed layout.
///
/// Nodes start at random positions in the unit square, then repel each
/// other (`k² / d`) while edges pull their endpoints together
/// (`d² / k`), with a linearly cooling displacement cap.  The result
/// is rescaled to fit `[-1, 1]²` centered on the origin.
///
/// Deterministic for a given `seed`.
pub struct SpringLayout {
    /// Optimal pairwise distance.  `None` uses `1 / sqrt(n)`.
    pub k: Option<f32>,
    /// Force-simulation iterations.
    pub iterations: usize,
    /// Seed for the initial random placement.
    pub seed: u64,
}

impl SpringLayout {
    pub fn new(k: Option<f32>, iterations: usize, seed: u64) -> Self {
        Self { k, iterations, seed }
    }
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self { k: Some(0.15), iterations: 20, seed: 42 }
    }
}

impl LayoutProvider for SpringLayout {
    fn positions(&self, graph: &Graph) -> Vec<Point2> {
        let n = graph.node_count();
        if n == 0 {
            return Vec::new();
        }

        let mut rng = SimRng::new(self.seed);
        let mut pos: Vec<Point2> = (0..n)
            .map(|_| Point2::new(rng.random::<f32>(), rng.random::<f32>()))
            .collect();
        if n == 1 {
            return pos;
        }

        let k = self.k.unwrap_or(1.0 / (n as f32).sqrt());
        // Initial temperature limits per-iteration movement; cools to
        // zero over the run.
        let mut temp: f32 = 0.1;
        let cooling = temp / (self.iterations as f32 + 1.0);

        let mut disp = vec![Point2::default(); n];
        for _ in 0..self.iterations {
            for d in disp.iter_mut() {
                *d = Point2::default();
            }

            // Pairwise repulsion: k^2 / d along the separation vector.
            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].x - pos[j].x;
                    let dy = pos[i].y - pos[j].y;
                    let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
                    let f = k * k / (dist * dist);
                    disp[i].x += dx * f;
                    disp[i].y += dy * f;
                    disp[j].x -= dx * f;
                    disp[j].y -= dy * f;
                }
            }

            // Edge attraction: d^2 / k pulls endpoints together.
            for &(a, b) in graph.edges() {
                let (a, b) = (a.index(), b.index());
                let dx = pos[a].x - pos[b].x;
                let dy = pos[a].y - pos[b].y;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
                let f = dist / k;
                disp[a].x -= dx * f;
                disp[a].y -= dy * f;
                disp[b].x += dx * f;
                disp[b].y += dy * f;
            }

            // Apply displacements, capped by the current temperature.
            for (p, d) in pos.iter_mut().zip(&disp) {
                let len = (d.x * d.x + d.y * d.y).sqrt().max(1e-6);
                let step = len.min(temp);
                p.x += d.x / len * step;
                p.y += d.y / len * step;
            }
            temp -= cooling;
        }

        rescale_to_unit(&mut pos);
        pos
    }
}

/// Center positions on the origin and scale the largest coordinate
/// magnitude to 1, so every spring layout lands in `[-1, 1]²`.
fn rescale_to_unit(pos: &mut [Point2]) {
    let n = pos.len() as f32;
    let cx = pos.iter().map(|p| p.x).sum::<f32>() / n;
    let cy = pos.iter().map(|p| p.y).sum::<f32>() / n;
    let mut max_abs: f32 = 0.0;
    for p in pos.iter_mut() {
        p.x -= cx;
        p.y -= cy;
        max_abs = max_abs.max(p.x.abs()).max(p.y.abs());
    }
    if max_abs > 0.0 {
        for p in pos.iter_mut() {
            p.x /= max_abs;
            p.y /= max_abs;
        }
    }
}
