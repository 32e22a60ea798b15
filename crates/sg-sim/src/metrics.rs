//! Per-step records handed to the reporting side.

use sg_agent::MoveOutcome;
use sg_core::Kind;

/// One value for the whole population and one per kind.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct ByKind<T> {
    pub all: T,
    pub a:   T,
    pub b:   T,
}

impl<T> ByKind<T> {
    #[inline]
    pub fn get(&self, kind: Kind) -> &T {
        match kind {
            Kind::A => &self.a,
            Kind::B => &self.b,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, kind: Kind) -> &mut T {
        match kind {
            Kind::A => &mut self.a,
            Kind::B => &mut self.b,
        }
    }
}

/// How many agents ended their turn in each [`MoveOutcome`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct OutcomeCounts {
    pub happy: u64,
    pub moved: u64,
    pub stuck: u64,
}

impl OutcomeCounts {
    #[inline]
    pub fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Happy => self.happy += 1,
            MoveOutcome::Moved => self.moved += 1,
            MoveOutcome::Stuck => self.stuck += 1,
        }
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.happy + self.moved + self.stuck
    }
}

impl ByKind<OutcomeCounts> {
    /// Count `outcome` against both the total and `kind`.
    #[inline]
    pub fn record(&mut self, kind: Kind, outcome: MoveOutcome) {
        self.all.record(outcome);
        self.get_mut(kind).record(outcome);
    }
}

/// Metrics for one step.  Step 0 describes the initial placement.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct StepRecord {
    pub step: u64,

    /// Mean number of unlike occupied neighbors per agent, measured after the
    /// step's moves.  A kind with no agents reports 0.0.
    pub integration: ByKind<f64>,

    pub outcomes: ByKind<OutcomeCounts>,
}

/// Why a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StopReason {
    /// Nobody moved and nobody was left unhappy.
    Converged,
    /// Nobody moved but some agents are unhappy with nowhere to go.
    Stalled,
    /// `max_iter` iterations ran without converging or stalling.
    MaxIterations,
}

impl StopReason {
    /// Decide from a completed step whether to stop.
    pub fn after_step(record: &StepRecord) -> Option<StopReason> {
        let o = record.outcomes.all;
        match (o.moved, o.stuck) {
            (0, 0) => Some(StopReason::Converged),
            (0, _) => Some(StopReason::Stalled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::Converged     => "converged",
            StopReason::Stalled       => "stalled",
            StopReason::MaxIterations => "max_iterations",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a finished run produced.
#[derive(Clone, PartialEq, Debug)]
pub struct RunReport {
    /// Step 0 followed by one record per executed iteration.
    pub records: Vec<StepRecord>,
    pub stop_reason: StopReason,
    /// Number of iterations actually executed.
    pub iterations: u64,
}
