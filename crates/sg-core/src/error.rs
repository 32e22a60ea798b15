//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating a [`SimConfig`][crate::SimConfig].
///
/// All of these are fatal: the model has no recoverable failure modes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("grid {width}x{height} too small for {num_agents} agents")]
    GridTooSmall {
        width:      u32,
        height:     u32,
        num_agents: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
