//! `sg-agent` — agent arena storage and the Schelling move policy.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (Structure-of-Arrays, indexed by `AgentId`)    |
//! | [`builder`] | `AgentStoreBuilder` (proportional kind split)               |
//! | [`policy`]  | `MovePolicy`, `MoveOutcome`, `NeighborTally`, `relocate`    |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                              |
//!
//! Agents hold no reference to the world.  Decision logic takes the
//! [`Grid`][sg_grid::Grid] and the store as explicit arguments, and every
//! position change goes through [`policy::relocate`].

pub mod builder;
pub mod error;
pub mod policy;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use policy::{MoveOutcome, MovePolicy, NeighborTally, relocate};
pub use store::AgentStore;
