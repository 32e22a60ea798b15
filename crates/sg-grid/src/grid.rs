//! Cell occupancy.
//!
//! `Grid` holds exactly one entry per cell (`Some(agent)` or `None`) in a flat
//! x-major `Vec`.  The occupied-cell count is tracked alongside so the
//! "occupied == population" invariant can be checked in O(1).

use sg_core::{AgentId, Coord, GridDims, Neighborhood};

use crate::topology::{Neighbors, neighbors};
use crate::{GridError, GridResult};

/// The spatial occupancy state of the model.
#[derive(Clone, Debug)]
pub struct Grid {
    dims:     GridDims,
    cells:    Vec<Option<AgentId>>,
    occupied: usize,
}

impl Grid {
    /// An all-empty grid of the given size.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
            occupied: 0,
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of non-empty cells.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// The agent at `c`, if any.  Out-of-bounds coordinates read as empty.
    #[inline]
    pub fn occupant(&self, c: Coord) -> Option<AgentId> {
        if !self.dims.contains(c) {
            return None;
        }
        self.cells[self.dims.index_of(c)]
    }

    #[inline]
    pub fn is_vacant(&self, c: Coord) -> bool {
        self.dims.contains(c) && self.cells[self.dims.index_of(c)].is_none()
    }

    /// Every currently empty cell, in x-major order.
    ///
    /// This is a fresh O(cells) scan on every call; the result reflects the
    /// grid at the moment of the call.
    pub fn vacancies(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| self.dims.coord_at(i))
            .collect()
    }

    /// Neighbor coordinates of `c` under this grid's dimensions.
    #[inline]
    pub fn neighbors(&self, c: Coord, hood: Neighborhood) -> Neighbors {
        neighbors(c, self.dims, hood)
    }

    /// Put `agent` into the empty cell `c` (initial placement).
    pub fn place(&mut self, c: Coord, agent: AgentId) -> GridResult<()> {
        let idx = self.checked_index(c)?;
        if let Some(occupant) = self.cells[idx] {
            return Err(GridError::Occupied { coord: c, occupant });
        }
        self.cells[idx] = Some(agent);
        self.occupied += 1;
        Ok(())
    }

    /// Move `agent` from `from` to `to` as one step.
    ///
    /// Both preconditions are checked before anything is written, so on error
    /// the grid is unchanged.
    pub fn move_occupant(&mut self, from: Coord, to: Coord, agent: AgentId) -> GridResult<()> {
        let src = self.checked_index(from)?;
        let dst = self.checked_index(to)?;
        if self.cells[src] != Some(agent) {
            return Err(GridError::SourceMismatch { coord: from, agent });
        }
        if let Some(occupant) = self.cells[dst] {
            return Err(GridError::Occupied { coord: to, occupant });
        }
        self.cells[src] = None;
        self.cells[dst] = Some(agent);
        Ok(())
    }

    fn checked_index(&self, c: Coord) -> GridResult<usize> {
        if self.dims.contains(c) {
            Ok(self.dims.index_of(c))
        } else {
            Err(GridError::OutOfBounds(c))
        }
    }
}
