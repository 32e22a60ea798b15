//! `sg-grid` — toroidal neighbor geometry and cell occupancy.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`topology`] | `neighbors()`, `Neighbors` (fixed-capacity neighbor list)  |
//! | [`grid`]     | `Grid` (flat `Vec<Option<AgentId>>` occupancy)             |
//! | [`error`]    | `GridError`, `GridResult<T>`                               |
//!
//! The topology is pure; `Grid` owns the only mutable spatial state and all
//! relocation goes through [`Grid::move_occupant`].

pub mod error;
pub mod grid;
pub mod topology;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use topology::{Neighbors, neighbors};
