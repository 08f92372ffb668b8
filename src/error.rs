//! Errors for model-state queries

use thiserror::Error;

/// Errors raised when querying a `StochasticBlockModel`'s fitted state.
///
/// Solver and graph-builder failures are not wrapped here; they propagate
/// as `anyhow::Error` from the call that produced them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// `entropy` or `communities` was called before any `fit`.
    #[error("model has not been fitted; call fit before querying state")]
    NotFitted,

    /// A nested fit produced a hierarchy with no levels.
    #[error("nested fit returned an empty hierarchy")]
    EmptyHierarchy,

    /// Overlapping extraction was requested but the fitted state carries
    /// no per-vertex overlap membership.
    #[error("fitted state has no overlapping block membership")]
    MissingOverlapBlocks,
}
