//! CSV output backend.
//!
//! One row per step record, step 0 first.  Integration means are written
//! with two decimals.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;
use sg_sim::{StepRecord, StopReason};

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Column names, in order.
pub const CSV_HEADER: [&str; 13] = [
    "turn",
    "overall_integration",
    "a_integration",
    "b_integration",
    "num_happy",
    "num_moved",
    "num_stayed",
    "num_happy_a",
    "num_moved_a",
    "num_stayed_a",
    "num_happy_b",
    "num_moved_b",
    "num_stayed_b",
];

/// Writes step records to a CSV sink.
pub struct CsvWriter<W: io::Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Self::with_writer(Writer::from_path(path)?)
    }
}

impl<W: io::Write> CsvWriter<W> {
    /// Write to any `io::Write` sink (e.g. a `Vec<u8>` in tests).
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        Self::with_writer(Writer::from_writer(sink))
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }

    fn with_writer(mut inner: Writer<W>) -> OutputResult<Self> {
        inner.write_record(CSV_HEADER)?;
        Ok(Self { inner, finished: false })
    }
}

impl<W: io::Write> OutputWriter for CsvWriter<W> {
    fn write_step(&mut self, r: &StepRecord) -> OutputResult<()> {
        let o = &r.outcomes;
        self.inner.write_record(&[
            r.step.to_string(),
            format!("{:.2}", r.integration.all),
            format!("{:.2}", r.integration.a),
            format!("{:.2}", r.integration.b),
            o.all.happy.to_string(),
            o.all.moved.to_string(),
            o.all.stuck.to_string(),
            o.a.happy.to_string(),
            o.a.moved.to_string(),
            o.a.stuck.to_string(),
            o.b.happy.to_string(),
            o.b.moved.to_string(),
            o.b.stuck.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self, _stop_reason: StopReason) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
