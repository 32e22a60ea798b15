//! Grid coordinates and dimensions.
//!
//! A [`Coord`] is a plain `(x, y)` value with `x ∈ [0, width)` and
//! `y ∈ [0, height)`.  Cells are stored x-major: the flat index of `(x, y)`
//! is `x * height + y`, which is also the order vacancies are enumerated in.

use std::fmt;

/// A cell position on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    /// Sentinel for an agent that has not been placed yet.
    pub const INVALID: Coord = Coord { x: u32::MAX, y: u32::MAX };

    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Width and height of the torus.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub width:  u32,
    pub height: u32,
}

impl GridDims {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// Flat x-major index of `c`.  Caller guarantees `contains(c)`.
    #[inline]
    pub fn index_of(self, c: Coord) -> usize {
        c.x as usize * self.height as usize + c.y as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_at(self, index: usize) -> Coord {
        let h = self.height as usize;
        Coord::new((index / h) as u32, (index % h) as u32)
    }

    /// Iterate every coordinate in x-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Coord::new(x, y)))
    }
}
