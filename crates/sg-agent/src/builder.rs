//! Fluent builder for [`AgentStore`].
//!
//! # Usage
//!
//! ```rust
//! use sg_agent::AgentStoreBuilder;
//! use sg_core::{Kind, SamePref};
//!
//! let store = AgentStoreBuilder::new(10)
//!     .kind_a_count(3)
//!     .same_pref(SamePref { a: 0.4, b: 0.7 })
//!     .build();
//!
//! assert_eq!(store.count, 10);
//! assert_eq!(store.count_of(Kind::A), 3);
//! assert_eq!(store.same_pref[9], 0.7);
//! ```

use sg_core::{Kind, SamePref, SimConfig};

use crate::AgentStore;

/// Builds the population with a deterministic kind split: the first
/// `kind_a_count` agents are [`Kind::A`], the rest [`Kind::B`].
///
/// Randomizing the order agents are placed and evaluated in is the engine's
/// job; ids here are stable for the whole run.
pub struct AgentStoreBuilder {
    count:     usize,
    kind_a:    usize,
    same_pref: SamePref,
}

impl AgentStoreBuilder {
    /// A builder for `count` agents, all kind `B` with threshold 0 until
    /// configured otherwise.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            kind_a:    0,
            same_pref: SamePref { a: 0.0, b: 0.0 },
        }
    }

    /// Size, split, and thresholds taken from `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.num_agents)
            .kind_a_count(config.num_kind_a())
            .same_pref(config.same_pref)
    }

    /// Number of kind-`A` agents.  Clamped to `count`.
    pub fn kind_a_count(mut self, n: usize) -> Self {
        self.kind_a = n.min(self.count);
        self
    }

    pub fn same_pref(mut self, same_pref: SamePref) -> Self {
        self.same_pref = same_pref;
        self
    }

    /// Allocate the store.  Every agent starts unplaced.
    pub fn build(self) -> AgentStore {
        let kind: Vec<Kind> = (0..self.count)
            .map(|i| if i < self.kind_a { Kind::A } else { Kind::B })
            .collect();
        let same_pref = kind.iter().map(|&k| self.same_pref.for_kind(k)).collect();
        AgentStore::new(kind, same_pref)
    }
}
