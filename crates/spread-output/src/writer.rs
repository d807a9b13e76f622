//! The `TraceWriter` trait implemented by all backend writers.

use spread_sim::Trace;

use crate::OutputResult;

/// Persists a finished simulation trace.
pub trait TraceWriter {
    /// Write all three trace sequences (node frames, edges, adoption
    /// series) to the backend.
    fn write_trace(&mut self, trace: &Trace) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
