use sg_agent::AgentError;
use sg_core::{AgentId, CoreError};
use sg_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{0} was not placed on the grid")]
    Unplaced(AgentId),

    #[error("grid holds {got} agents but the population is {expected}")]
    OccupancyMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
