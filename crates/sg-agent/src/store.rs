//! Arena agent storage.
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let here = store.location[agent.index()];
//! ```
//!
//! `location` starts at [`Coord::INVALID`] and is only ever written by
//! [`relocate`][crate::relocate] and the engine's initial placement.

use sg_core::{AgentId, Coord, Kind};

/// Structure-of-Arrays storage for the whole population.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Population kind, fixed at build time.
    pub kind: Vec<Kind>,

    /// Same-kind preference threshold, copied from the agent's kind.
    pub same_pref: Vec<f64>,

    /// Current cell.  `Coord::INVALID` before placement.
    pub location: Vec<Coord>,
}

impl AgentStore {
    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn kind_of(&self, agent: AgentId) -> Kind {
        self.kind[agent.index()]
    }

    #[inline]
    pub fn location_of(&self, agent: AgentId) -> Coord {
        self.location[agent.index()]
    }

    /// Number of agents of `kind`.
    pub fn count_of(&self, kind: Kind) -> usize {
        self.kind.iter().filter(|&&k| k == kind).count()
    }

    /// `true` once every agent has a valid location.
    pub fn all_placed(&self) -> bool {
        self.location.iter().all(|c| c.is_valid())
    }

    pub(crate) fn new(kind: Vec<Kind>, same_pref: Vec<f64>) -> Self {
        let count = kind.len();
        Self {
            count,
            kind,
            same_pref,
            location: vec![Coord::INVALID; count],
        }
    }
}
