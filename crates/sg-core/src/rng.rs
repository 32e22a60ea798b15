//! Deterministic simulation RNG.
//!
//! The model is a strictly sequential stochastic process, so a single
//! `SmallRng` seeded from [`SimConfig::seed`][crate::SimConfig::seed] drives
//! every random decision: population shuffle, initial placement, per-step
//! evaluation order, and forced-move destinations.  Same seed, same run.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Simulation-level RNG, passed explicitly to everything that needs it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
