//! Solver boundary for block model fitting
//!
//! The partition search itself (MDL minimization, entropy computation) is
//! not implemented in this crate; it lives behind [`BlockModelSolver`] and
//! is supplied by the caller.

use anyhow::Result;

use crate::config::WeightModel;
use crate::graph::CooccurrenceGraph;
use crate::model::state::BlockState;

/// Edge covariates handed to a solver: one value per graph edge in
/// edge-index order, plus the model they should be fitted under
#[derive(Debug, Clone)]
pub struct EdgeWeights<'a> {
    pub values: &'a [f64],
    pub model: WeightModel,
}

/// Options forwarded unchanged to a solver entry point
#[derive(Debug, Clone)]
pub struct FitOptions<'a> {
    /// Correct for vertex degree heterogeneity
    pub degree_correction: bool,

    /// Search for overlapping block memberships
    pub overlap: bool,

    /// Edge covariates; `None` means the solver must treat the graph as
    /// unweighted even if its edges carry payloads
    pub weights: Option<EdgeWeights<'a>>,
}

/// Minimum-description-length stochastic block model solver
///
/// Implementations own every computationally significant step; failures
/// propagate to the caller unmodified.
pub trait BlockModelSolver {
    /// Flat partition search
    fn minimize(&self, graph: &CooccurrenceGraph, opts: &FitOptions) -> Result<BlockState>;

    /// Nested partition search; the returned hierarchy lists the finest
    /// level first
    fn minimize_nested(
        &self,
        graph: &CooccurrenceGraph,
        opts: &FitOptions,
    ) -> Result<Vec<BlockState>>;
}
