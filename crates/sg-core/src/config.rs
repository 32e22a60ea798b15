//! Static run parameters.
//!
//! `SimConfig` is built once (in code or from a JSON file with the `serde`
//! feature) and is immutable for the run.  [`SimConfig::validate`] must pass
//! before a world is constructed; the engine calls it itself.

use crate::{CoreError, CoreResult, GridDims, Kind, Neighborhood};

/// Same-kind preference threshold per population, each in `[0, 1]`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamePref {
    pub a: f64,
    pub b: f64,
}

impl SamePref {
    #[inline]
    pub fn for_kind(&self, kind: Kind) -> f64 {
        match kind {
            Kind::A => self.a,
            Kind::B => self.b,
        }
    }
}

/// Global configuration for a single run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of columns (`x` range).
    pub width: u32,

    /// Number of rows (`y` range).
    pub height: u32,

    /// Total population.  Must be strictly less than `width * height`.
    pub num_agents: usize,

    pub same_pref: SamePref,

    /// Fraction of the population that is kind `A`.
    pub agent_prop: f64,

    /// Iteration budget.  `0` initializes and reports without moving anyone.
    pub max_iter: u64,

    /// `true`: unhappy agents jump to a random vacancy regardless of fit.
    /// `false`: unhappy agents take the first vacancy where they'd be happy.
    pub forced_moves: bool,

    pub neighborhood: Neighborhood,

    /// Seed for the run's [`SimRng`][crate::SimRng].
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:        40,
            height:       40,
            num_agents:   1330,
            same_pref:    SamePref { a: 0.4, b: 0.7 },
            agent_prop:   0.3,
            max_iter:     100,
            forced_moves: false,
            neighborhood: Neighborhood::Moore,
            seed:         42,
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.width, self.height)
    }

    /// Number of kind-`A` agents: `num_agents * agent_prop`, rounded half to
    /// even.  The remaining agents are kind `B`.
    pub fn num_kind_a(&self) -> usize {
        let raw = (self.num_agents as f64 * self.agent_prop).round_ties_even();
        (raw.max(0.0) as usize).min(self.num_agents)
    }

    /// Reject configurations the model cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.dims().cell_count() <= self.num_agents {
            return Err(CoreError::GridTooSmall {
                width:      self.width,
                height:     self.height,
                num_agents: self.num_agents,
            });
        }
        check_fraction("same_pref.a", self.same_pref.a)?;
        check_fraction("same_pref.b", self.same_pref.b)?;
        check_fraction("agent_prop", self.agent_prop)?;
        Ok(())
    }
}

fn check_fraction(name: &str, value: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must lie in [0, 1], got {value}")))
    }
}
