//! Fluent builder for constructing a [`World`].

use sg_core::{SimConfig, SimRng};

use crate::{SimResult, World};

/// Fluent builder for [`World`].
///
/// # Optional inputs (have defaults)
///
/// | Method     | Default                         |
/// |------------|---------------------------------|
/// | `.rng(r)`  | `SimRng::new(config.seed)`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = SimBuilder::new(config)
///     .rng(SimRng::new(7))
///     .build()?;
/// world.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    rng:    Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, rng: None }
    }

    /// Supply the random source explicitly instead of seeding from the config.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the config, build the population, and place every agent.
    pub fn build(self) -> SimResult<World> {
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        World::new(self.config, rng)
    }
}
