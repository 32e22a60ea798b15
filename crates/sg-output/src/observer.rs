//! `ReportObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sg_sim::{RunReport, SimObserver, StepRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that forwards every step record to an [`OutputWriter`]
/// and finishes it when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `world.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for ReportObserver<W> {
    fn on_step_end(&mut self, record: &StepRecord) {
        let result = self.writer.write_step(record);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, report: &RunReport) {
        let result = self.writer.finish(report.stop_reason);
        self.store_err(result);
    }
}
