//! Observer trait for progress reporting and data collection.

use crate::{RunReport, StepRecord};

/// Callbacks invoked by [`World::run`][crate::World::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct MovesPrinter;
///
/// impl SimObserver for MovesPrinter {
///     fn on_step_end(&mut self, record: &StepRecord) {
///         println!("step {}: {} moved", record.step, record.outcomes.all.moved);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each record is produced, starting with step 0.
    fn on_step_end(&mut self, _record: &StepRecord) {}

    /// Called once when the run stops, for any reason.
    fn on_sim_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
