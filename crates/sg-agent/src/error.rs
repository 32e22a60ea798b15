use sg_core::AgentId;
use sg_grid::GridError;
use thiserror::Error;

/// Errors raised by the move policy.  All indicate a broken invariant.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{0} has no location")]
    Unplaced(AgentId),

    #[error("no vacant cell available for {0}")]
    NoVacancy(AgentId),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
