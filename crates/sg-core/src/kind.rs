//! The two populations and the neighborhood shapes.

use std::fmt;

/// Population kind of an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    A,
    B,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::A, Kind::B];

    /// Lower-case label used in CSV column names.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::A => "a",
            Kind::B => "b",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::A => f.write_str("A"),
            Kind::B => f.write_str("B"),
        }
    }
}

/// Which surrounding cells count as neighbors.  Both wrap toroidally.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Neighborhood {
    /// 8-connected: cardinal and diagonal cells.
    #[default]
    Moore,
    /// 4-connected: cardinal cells only.
    VonNeumann,
}

impl Neighborhood {
    /// Maximum number of neighbor coordinates produced for one cell.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            Neighborhood::Moore      => 8,
            Neighborhood::VonNeumann => 4,
        }
    }
}
