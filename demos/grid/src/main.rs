//! grid — adoption diffusion on a 32×32 lattice.
//!
//! Every node starts off-platform with a uniform random transition
//! cost; 15 % are seeded as adopters, and a flat subsidy plus two
//! network-effect terms drive the rest.  Writes the full trace as CSV
//! to `./output-grid/`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use spread_core::SimParams;
use spread_graph::{generate, GridLayout, LayoutProvider};
use spread_output::{CsvWriter, TraceWriter};
use spread_sim::{SimObserver, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE: usize = 32;
const SEED: u64 = 42;
const TIMESTEPS: u32 = 20;
const OUTPUT_DIR: &str = "./output-grid";

// ── Progress printer ──────────────────────────────────────────────────────────

struct Progress {
    node_count: usize,
}

impl SimObserver for Progress {
    fn on_step_end(&mut self, timestep: u32, adopted: usize) {
        println!(
            "t={timestep:>2}  adopters={adopted:>5}  ({:.1} %)",
            100.0 * adopted as f64 / self.node_count as f64
        );
    }
}

fn main() -> Result<()> {
    let params = SimParams {
        w1: 1.0,
        w2: 1.0,
        w3: 1.0,
        subsidy: 10.0,
        transition_lb: 10.0,
        transition_ub: 20.0,
        bootstrap: 0.15,
        timesteps: TIMESTEPS,
        seed: SEED,
    };

    let started = Instant::now();
    let graph = generate::grid(GRID_SIZE, GRID_SIZE);
    let positions = GridLayout::new(GRID_SIZE, GRID_SIZE).positions(&graph);
    println!(
        "grid {GRID_SIZE}x{GRID_SIZE}: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut progress = Progress { node_count: graph.node_count() };
    let trace = Simulation::new(&graph, params)?.run(&positions, &mut progress)?;

    fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_trace(&trace)?;
    writer.finish()?;

    println!(
        "final adoption {:.1} % — trace written to {OUTPUT_DIR} in {:.2?}",
        100.0 * trace.final_percentage(),
        started.elapsed()
    );
    Ok(())
}
