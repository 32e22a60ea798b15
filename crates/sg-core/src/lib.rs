//! `sg-core` — foundational types for the `sg` Schelling segregation model.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`coord`]       | `Coord`, `GridDims`                                   |
//! | [`kind`]        | `Kind` (the two populations), `Neighborhood`          |
//! | [`config`]      | `SimConfig`, `SamePref`                               |
//! | [`rng`]         | `SimRng` (the single injectable random source)        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod kind;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SamePref, SimConfig};
pub use coord::{Coord, GridDims};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use kind::{Kind, Neighborhood};
pub use rng::SimRng;
