//! Happiness evaluation and the move-or-stay decision.
//!
//! An agent looks at the occupied cells around a coordinate and compares the
//! like-kind fraction to its threshold:
//!
//! ```text
//! occupied neighbors == 0           → unhappy
//! like / occupied <  same_pref      → unhappy
//! like / occupied >= same_pref      → happy
//! ```
//!
//! The zero-neighbor rule is inherited behavior and changes run outcomes if
//! altered, so it stays.
//!
//! Evaluation always reads the live grid.  A speculative check at a vacancy
//! does not vacate the agent's current cell first, so on small tori the agent
//! may see itself as a neighbor.

use sg_core::{AgentId, Coord, Neighborhood, SimConfig, SimRng};
use sg_grid::Grid;

use crate::{AgentError, AgentResult, AgentStore};

/// Result of one agent's turn in an iteration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum MoveOutcome {
    /// Happy where it stood (or, under forced moves, happy after moving).
    Happy = 0,
    /// Unhappy and relocated.
    Moved = 1,
    /// Unhappy and no acceptable vacancy was found.
    Stuck = 2,
}

impl MoveOutcome {
    /// Numeric code: 0 happy, 1 unhappy but moved, 2 unhappy and couldn't move.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Like/unlike counts over the occupied neighbor cells of one coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct NeighborTally {
    pub like:   usize,
    pub unlike: usize,
}

impl NeighborTally {
    #[inline]
    pub fn occupied(self) -> usize {
        self.like + self.unlike
    }

    /// Happiness test against `same_pref`.
    pub fn satisfies(self, same_pref: f64) -> bool {
        let occupied = self.occupied();
        if occupied == 0 {
            return false;
        }
        self.like as f64 / occupied as f64 >= same_pref
    }
}

/// The neighborhood shape plus the relocation rule.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct MovePolicy {
    pub neighborhood: Neighborhood,
    /// Move to a random vacancy regardless of fit instead of the first
    /// vacancy that would satisfy the agent.
    pub forced: bool,
}

impl MovePolicy {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            neighborhood: config.neighborhood,
            forced:       config.forced_moves,
        }
    }

    /// Count like and unlike occupants around `at` from `agent`'s point of
    /// view.  Duplicate neighbor coordinates count once per occurrence.
    pub fn tally(&self, store: &AgentStore, grid: &Grid, agent: AgentId, at: Coord) -> NeighborTally {
        let own = store.kind_of(agent);
        let mut tally = NeighborTally::default();
        for &c in &grid.neighbors(at, self.neighborhood) {
            if let Some(other) = grid.occupant(c) {
                if store.kind_of(other) == own {
                    tally.like += 1;
                } else {
                    tally.unlike += 1;
                }
            }
        }
        tally
    }

    /// Would `agent` be happy at `at`, given the grid as it stands?
    #[inline]
    pub fn is_happy_at(&self, store: &AgentStore, grid: &Grid, agent: AgentId, at: Coord) -> bool {
        self.tally(store, grid, agent, at).satisfies(store.same_pref[agent.index()])
    }

    /// Is `agent` happy where it currently is?
    pub fn is_happy(&self, store: &AgentStore, grid: &Grid, agent: AgentId) -> AgentResult<bool> {
        let here = placed_location(store, agent)?;
        Ok(self.is_happy_at(store, grid, agent, here))
    }

    /// Number of occupied neighbors of a different kind around `agent`.
    pub fn unlike_neighbors(&self, store: &AgentStore, grid: &Grid, agent: AgentId) -> AgentResult<usize> {
        let here = placed_location(store, agent)?;
        Ok(self.tally(store, grid, agent, here).unlike)
    }

    /// Give `agent` its turn: stay if happy, otherwise try to relocate.
    ///
    /// Vacancies are re-scanned on every call so moves made earlier in the same
    /// iteration are visible.
    pub fn attempt_move(
        &self,
        store: &mut AgentStore,
        grid:  &mut Grid,
        agent: AgentId,
        rng:   &mut SimRng,
    ) -> AgentResult<MoveOutcome> {
        if self.is_happy(store, grid, agent)? {
            return Ok(MoveOutcome::Happy);
        }

        let vacancies = grid.vacancies();

        if self.forced {
            let &dest = rng.choose(&vacancies).ok_or(AgentError::NoVacancy(agent))?;
            relocate(store, grid, agent, dest)?;
            return Ok(if self.is_happy_at(store, grid, agent, dest) {
                MoveOutcome::Happy
            } else {
                MoveOutcome::Moved
            });
        }

        let found = vacancies
            .iter()
            .copied()
            .find(|&c| self.is_happy_at(store, grid, agent, c));
        match found {
            Some(dest) => {
                relocate(store, grid, agent, dest)?;
                Ok(MoveOutcome::Moved)
            }
            None => Ok(MoveOutcome::Stuck),
        }
    }
}

/// Move `agent` to the empty cell `to`, updating grid and store together.
///
/// The grid checks its preconditions before writing, so on error neither the
/// grid nor the store has changed.
pub fn relocate(store: &mut AgentStore, grid: &mut Grid, agent: AgentId, to: Coord) -> AgentResult<()> {
    let from = placed_location(store, agent)?;
    grid.move_occupant(from, to, agent)?;
    store.location[agent.index()] = to;
    Ok(())
}

fn placed_location(store: &AgentStore, agent: AgentId) -> AgentResult<Coord> {
    let here = store.location_of(agent);
    if here.is_valid() {
        Ok(here)
    } else {
        Err(AgentError::Unplaced(agent))
    }
}
