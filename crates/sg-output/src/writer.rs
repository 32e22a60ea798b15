//! The `OutputWriter` trait implemented by all report backends.

use sg_sim::{StepRecord, StopReason};

use crate::OutputResult;

/// Trait implemented by the CSV and console backends.
///
/// Errors are stored by [`ReportObserver`][crate::ReportObserver] and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Write (or buffer) one step record.
    fn write_step(&mut self, record: &StepRecord) -> OutputResult<()>;

    /// Flush everything.  `stop_reason` is how the run ended.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self, stop_reason: StopReason) -> OutputResult<()>;
}

/// Two writers fed the same records, e.g. console and CSV together.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_step(&mut self, record: &StepRecord) -> OutputResult<()> {
        self.0.write_step(record)?;
        self.1.write_step(record)
    }

    fn finish(&mut self, stop_reason: StopReason) -> OutputResult<()> {
        self.0.finish(stop_reason)?;
        self.1.finish(stop_reason)
    }
}

/// An absent writer is a no-op, so optional outputs compose with the tuple
/// impl above.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_step(&mut self, record: &StepRecord) -> OutputResult<()> {
        match self {
            Some(w) => w.write_step(record),
            None => Ok(()),
        }
    }

    fn finish(&mut self, stop_reason: StopReason) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(stop_reason),
            None => Ok(()),
        }
    }
}
