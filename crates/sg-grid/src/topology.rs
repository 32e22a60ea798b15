//! Neighbor geometry on a torus.
//!
//! Each axis wraps independently: stepping below 0 lands on the last index,
//! stepping past the last index lands on 0.  Neighbors are produced in a
//! fixed order, cardinal cells first:
//!
//! ```text
//! (x+1, y) (x-1, y) (x, y+1) (x, y-1)                      ← VonNeumann
//! (x+1, y+1) (x+1, y-1) (x-1, y+1) (x-1, y-1)              ← Moore adds these
//! ```
//!
//! On grids narrower than 3 along an axis the list contains duplicates (and,
//! at width or height 1, the cell itself).  That degenerate case is left as
//! is: callers count each occurrence.

use sg_core::{Coord, GridDims, Neighborhood};

const OFFSETS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Up to 8 neighbor coordinates, stored inline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbors {
    coords: [Coord; 8],
    len:    u8,
}

impl Neighbors {
    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item     = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Neighbor coordinates of `c` on a `dims` torus.
///
/// `c` must lie inside `dims`.
pub fn neighbors(c: Coord, dims: GridDims, hood: Neighborhood) -> Neighbors {
    let mut out = Neighbors { coords: [Coord::INVALID; 8], len: 0 };
    for &(dx, dy) in &OFFSETS[..hood.size()] {
        out.coords[out.len as usize] = Coord::new(
            wrap(c.x, dx, dims.width),
            wrap(c.y, dy, dims.height),
        );
        out.len += 1;
    }
    out
}

#[inline]
fn wrap(v: u32, delta: i8, extent: u32) -> u32 {
    let max = extent - 1;
    match delta {
        1 if v >= max => 0,
        1 => v + 1,
        -1 if v == 0 => max,
        -1 => v - 1,
        _ => v,
    }
}
