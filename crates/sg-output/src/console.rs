//! Human-readable end-of-run summary.
//!
//! Records are buffered and the whole report is rendered by `finish`, one
//! line per series, each series listing every step from 0 to the end.

use std::fmt::Display;
use std::io;

use sg_core::Kind;
use sg_sim::{OutcomeCounts, StepRecord, StopReason};

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Buffers step records and prints them as series to `out`.
pub struct ConsoleReport<W: io::Write> {
    out:      W,
    records:  Vec<StepRecord>,
    finished: bool,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: Vec::new(), finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, stop_reason: StopReason) -> io::Result<()> {
        let recs = &self.records;
        let out = &mut self.out;

        writeln!(out)?;
        writeln!(out, "All results begin at time=0 and go in order to the end.")?;
        writeln!(out)?;

        writeln!(
            out,
            "The average number of neighbors an agent has not like them: {}",
            integration_series(recs, None),
        )?;
        for kind in Kind::ALL {
            writeln!(
                out,
                "The average number of neighbors a kind {kind} agent has not like them: {}",
                integration_series(recs, Some(kind)),
            )?;
        }

        writeln!(out, "The number of happy agents: {}", count_series(recs, None, |o| o.happy))?;
        writeln!(out, "The number of moves per turn: {}", count_series(recs, None, |o| o.moved))?;
        writeln!(
            out,
            "The number of agents who failed to find a new home: {}",
            count_series(recs, None, |o| o.stuck),
        )?;

        for kind in Kind::ALL {
            let k = Some(kind);
            writeln!(out, "The number of happy {kind} agents: {}", count_series(recs, k, |o| o.happy))?;
            writeln!(out, "The number of {kind} moves per turn: {}", count_series(recs, k, |o| o.moved))?;
            writeln!(
                out,
                "The number of {kind} agents who failed to find a new home: {}",
                count_series(recs, k, |o| o.stuck),
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Stopped: {}", describe(stop_reason, recs.len().saturating_sub(1)))?;
        out.flush()
    }
}

impl<W: io::Write> OutputWriter for ConsoleReport<W> {
    fn write_step(&mut self, record: &StepRecord) -> OutputResult<()> {
        self.records.push(*record);
        Ok(())
    }

    fn finish(&mut self, stop_reason: StopReason) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.render(stop_reason)?;
        Ok(())
    }
}

/// `None` selects the whole population.
fn integration_series(recs: &[StepRecord], kind: Option<Kind>) -> String {
    series(recs.iter().map(|r| {
        let v = kind.map_or(r.integration.all, |k| *r.integration.get(k));
        format!("{v:.2}")
    }))
}

fn count_series(recs: &[StepRecord], kind: Option<Kind>, field: fn(&OutcomeCounts) -> u64) -> String {
    series(recs.iter().map(|r| field(kind.map_or(&r.outcomes.all, |k| r.outcomes.get(k)))))
}

fn series<T: Display>(items: impl Iterator<Item = T>) -> String {
    let parts: Vec<String> = items.map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn describe(reason: StopReason, iterations: usize) -> String {
    match reason {
        StopReason::Converged => format!("everyone is happy after {iterations} iterations"),
        StopReason::Stalled => format!(
            "some agents are unhappy but cannot find anywhere to move ({iterations} iterations)"
        ),
        StopReason::MaxIterations => format!("iteration budget of {iterations} exhausted"),
    }
}
