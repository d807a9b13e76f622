//! Simulation observer trait for progress reporting.

use crate::Trace;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at
/// timestep boundaries.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, timestep: u32, adopted: usize) {
///         println!("t={timestep}: {adopted} adopters");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each timestep's state has been recorded, including
    /// timestep 0 (the bootstrap state).  `adopted` is the number of
    /// nodes on the platform at the end of that step.
    fn on_step_end(&mut self, _timestep: u32, _adopted: usize) {}

    /// Called once with the finished trace, just before `run` returns it.
    fn on_run_end(&mut self, _trace: &Trace) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
