//! `sg-sim` — the Schelling iteration loop.
//!
//! # Iteration
//!
//! ```text
//! record step 0 (initial placement; moved = stuck = 0)
//! for iteration in 1..=config.max_iter:
//!   ① Shuffle  — fresh random evaluation order.
//!   ② Moves    — each agent in order: stay if happy, else try to relocate.
//!                Moves land immediately and are seen by later agents.
//!   ③ Metrics  — outcome counts + mean unlike-neighbor count (after moves).
//!   ④ Stop?    — moved == 0 && stuck == 0 → Converged
//!                moved == 0 && stuck  > 0 → Stalled
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sg_core::SimConfig;
//! use sg_sim::{NoopObserver, SimBuilder};
//!
//! let mut world = SimBuilder::new(SimConfig::default()).build()?;
//! let report = world.run(&mut NoopObserver)?;
//! println!("{:?} after {} iterations", report.stop_reason, report.iterations);
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod world;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{ByKind, OutcomeCounts, RunReport, StepRecord, StopReason};
pub use observer::{NoopObserver, SimObserver};
pub use world::World;
