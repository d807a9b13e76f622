//! `spread-output` — trace export for the spread framework.
//!
//! The engine returns a [`spread_sim::Trace`] by value; this crate
//! persists it.  Currently one backend:
//!
//! | Backend | Files created                                     |
//! |---------|---------------------------------------------------|
//! | CSV     | `node_frames.csv`, `edges.csv`, `adoption.csv`    |
//!
//! All backends implement [`TraceWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use spread_output::{CsvWriter, TraceWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_trace(&trace)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::TraceWriter;
