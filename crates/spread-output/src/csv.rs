//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `node_frames.csv` — one row per node per timestep
//! - `edges.csv` — one row per undirected edge
//! - `adoption.csv` — the adoption-percentage series

use std::fs::File;
use std::path::Path;

use csv::Writer;

use spread_sim::Trace;

use crate::writer::TraceWriter;
use crate::OutputResult;

/// Writes a trace to three CSV files.
pub struct CsvWriter {
    frames: Writer<File>,
    edges: Writer<File>,
    adoption: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("node_frames.csv"))?;
        frames.write_record(["x", "y", "timestep", "color"])?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["x1", "y1", "x2", "y2"])?;

        let mut adoption = Writer::from_path(dir.join("adoption.csv"))?;
        adoption.write_record(["timestep", "percentage"])?;

        Ok(Self { frames, edges, adoption, finished: false })
    }
}

impl TraceWriter for CsvWriter {
    fn write_trace(&mut self, trace: &Trace) -> OutputResult<()> {
        for f in &trace.node_frames {
            self.frames.write_record(&[
                f.x.to_string(),
                f.y.to_string(),
                f.timestep.to_string(),
                f.color.as_str().to_string(),
            ])?;
        }
        for e in &trace.edges {
            self.edges.write_record(&[
                e.x1.to_string(),
                e.y1.to_string(),
                e.x2.to_string(),
                e.y2.to_string(),
            ])?;
        }
        for p in &trace.percentages {
            self.adoption
                .write_record(&[p.timestep.to_string(), p.percentage.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.frames.flush()?;
        self.edges.flush()?;
        self.adoption.flush()?;
        self.finished = true;
        Ok(())
    }
}
