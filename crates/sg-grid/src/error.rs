//! Grid error type.
//!
//! Every variant is an invariant violation: a correct engine never produces
//! one, so callers propagate them as fatal.

use thiserror::Error;

use sg_core::{AgentId, Coord};

/// Errors produced by `sg-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("cell {coord} is already occupied by {occupant}")]
    Occupied { coord: Coord, occupant: AgentId },

    #[error("cell {coord} does not hold {agent}")]
    SourceMismatch { coord: Coord, agent: AgentId },
}

pub type GridResult<T> = Result<T, GridError>;
