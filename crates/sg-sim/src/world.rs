//! The `World` struct and its iteration loop.

use sg_agent::{AgentStore, AgentStoreBuilder, MovePolicy};
use sg_core::{AgentId, Kind, SimConfig, SimRng};
use sg_grid::Grid;
use tracing::{debug, info};

use crate::{
    ByKind, OutcomeCounts, RunReport, SimError, SimObserver, SimResult, StepRecord, StopReason,
};

/// The simulation engine.
///
/// `World` is the sole owner and mutator of the grid and the population.
/// Agents are plain arena records; the policy receives the grid and the store
/// as arguments on every call.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct World {
    /// Run parameters, fixed for the run.
    pub config: SimConfig,

    /// Cell occupancy.
    pub grid: Grid,

    /// Every agent's kind, threshold, and location.
    pub agents: AgentStore,

    /// Current evaluation order; reshuffled at the start of every iteration.
    pub order: Vec<AgentId>,

    /// Neighborhood shape and relocation rule.
    pub policy: MovePolicy,

    /// Iterations executed so far.
    pub iteration: u64,

    rng: SimRng,
}

impl World {
    /// Validate `config`, build the population, and place every agent on a
    /// uniformly random vacant cell in shuffled order.
    pub fn new(config: SimConfig, mut rng: SimRng) -> SimResult<Self> {
        config.validate()?;

        let agents = AgentStoreBuilder::from_config(&config).build();
        let mut order: Vec<AgentId> = agents.agent_ids().collect();
        rng.shuffle(&mut order);

        let mut world = Self {
            grid: Grid::new(config.dims()),
            policy: MovePolicy::from_config(&config),
            iteration: 0,
            config,
            agents,
            order,
            rng,
        };
        world.place_all()?;

        info!(
            width = world.config.width,
            height = world.config.height,
            agents = world.agents.count,
            kind_a = world.agents.count_of(Kind::A),
            forced = world.policy.forced,
            seed = world.config.seed,
            "world initialized",
        );
        Ok(world)
    }

    /// Run until convergence, stall, or `max_iter` iterations.
    ///
    /// Emits step 0 first, then one record per iteration.  `on_sim_end` is
    /// called once with the full report before returning.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        let initial = self.initial_record()?;
        observer.on_step_end(&initial);
        let mut records = vec![initial];

        let mut stop_reason = StopReason::MaxIterations;
        let start = self.iteration;
        while self.iteration - start < self.config.max_iter {
            let record = self.step()?;
            observer.on_step_end(&record);
            records.push(record);

            if let Some(reason) = StopReason::after_step(&record) {
                stop_reason = reason;
                break;
            }
        }

        match stop_reason {
            StopReason::Converged => {
                info!(iteration = self.iteration, "everyone is happy, stopping");
            }
            StopReason::Stalled => {
                info!(
                    iteration = self.iteration,
                    "some agents are unhappy but cannot find anywhere to move, stopping",
                );
            }
            StopReason::MaxIterations => {
                info!(iteration = self.iteration, "iteration budget exhausted");
            }
        }

        let report = RunReport {
            records,
            stop_reason,
            iterations: self.iteration - start,
        };
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Execute one iteration and return its record.
    pub fn step(&mut self) -> SimResult<StepRecord> {
        self.rng.shuffle(&mut self.order);

        let mut outcomes = ByKind::<OutcomeCounts>::default();
        for &agent in &self.order {
            let outcome = self
                .policy
                .attempt_move(&mut self.agents, &mut self.grid, agent, &mut self.rng)?;
            outcomes.record(self.agents.kind_of(agent), outcome);
        }
        self.check_occupancy()?;
        self.iteration += 1;

        let record = StepRecord {
            step: self.iteration,
            integration: self.integration()?,
            outcomes,
        };
        debug!(
            step = record.step,
            happy = outcomes.all.happy,
            moved = outcomes.all.moved,
            stuck = outcomes.all.stuck,
            integration = record.integration.all,
            "step complete",
        );
        Ok(record)
    }

    /// Record for the current state with no move attempts: happy counts are
    /// agents currently happy, moved and stuck are zero.
    pub fn initial_record(&self) -> SimResult<StepRecord> {
        let mut outcomes = ByKind::<OutcomeCounts>::default();
        for agent in self.agents.agent_ids() {
            if self.policy.is_happy(&self.agents, &self.grid, agent)? {
                let kind = self.agents.kind_of(agent);
                outcomes.all.happy += 1;
                outcomes.get_mut(kind).happy += 1;
            }
        }
        Ok(StepRecord {
            step: self.iteration,
            integration: self.integration()?,
            outcomes,
        })
    }

    /// Mean unlike-neighbor count over all agents and per kind.
    pub fn integration(&self) -> SimResult<ByKind<f64>> {
        let mut sums = ByKind::<usize>::default();
        let mut counts = ByKind::<usize>::default();
        for agent in self.agents.agent_ids() {
            let unlike = self.policy.unlike_neighbors(&self.agents, &self.grid, agent)?;
            let kind = self.agents.kind_of(agent);
            sums.all += unlike;
            counts.all += 1;
            *sums.get_mut(kind) += unlike;
            *counts.get_mut(kind) += 1;
        }
        Ok(ByKind {
            all: mean(sums.all, counts.all),
            a:   mean(sums.a, counts.a),
            b:   mean(sums.b, counts.b),
        })
    }

    // ── Initialization ────────────────────────────────────────────────────

    fn place_all(&mut self) -> SimResult<()> {
        for &agent in &self.order {
            let vacancies = self.grid.vacancies();
            let &cell = self.rng.choose(&vacancies).ok_or(SimError::Unplaced(agent))?;
            self.grid.place(cell, agent)?;
            self.agents.location[agent.index()] = cell;
        }

        if let Some(agent) = self.agents.agent_ids().find(|&a| !self.agents.location_of(a).is_valid()) {
            return Err(SimError::Unplaced(agent));
        }
        self.check_occupancy()
    }

    fn check_occupancy(&self) -> SimResult<()> {
        let got = self.grid.occupied_count();
        if got != self.agents.count {
            return Err(SimError::OccupancyMismatch { expected: self.agents.count, got });
        }
        Ok(())
    }
}

fn mean(sum: usize, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum as f64 / count as f64 }
}
