//! Configuration for stochastic block model fitting

use serde::{Serialize, Deserialize};

/// Edge-weight model passed through to the block model solver when fitting
/// a weighted graph. The identifiers follow the covariate types understood
/// by MDL-based SBM solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightModel {
    RealExponential,
    RealNormal,
    DiscreteGeometric,
    DiscretePoisson,
    DiscreteBinomial,
}

impl WeightModel {
    /// Solver-facing identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightModel::RealExponential => "real-exponential",
            WeightModel::RealNormal => "real-normal",
            WeightModel::DiscreteGeometric => "discrete-geometric",
            WeightModel::DiscretePoisson => "discrete-poisson",
            WeightModel::DiscreteBinomial => "discrete-binomial",
        }
    }
}

/// Configuration flags for a stochastic block model fit
///
/// Immutable for the lifetime of the model holder. No combination of flags
/// is validated here; an inconsistent combination (e.g. a weight model on a
/// weightless graph) is forwarded to the solver and fails there, if at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SbmConfig {
    /// Fit a nested (hierarchical) block model instead of a flat one
    pub nested: bool,

    /// Correct for vertex degree heterogeneity when estimating blocks
    pub use_degree_correction: bool,

    /// Allow a label to belong to more than one block
    pub allow_overlap: bool,

    /// Weight model for edge covariates; `None` fits the graph unweighted
    pub weight_model: Option<WeightModel>,
}

impl Default for SbmConfig {
    fn default() -> Self {
        Self {
            nested: false,
            use_degree_correction: true,
            allow_overlap: false,
            weight_model: None,
        }
    }
}

impl SbmConfig {
    /// Create a configuration with explicit values for all four flags
    pub fn new(
        nested: bool,
        use_degree_correction: bool,
        allow_overlap: bool,
        weight_model: Option<WeightModel>,
    ) -> Self {
        Self {
            nested,
            use_degree_correction,
            allow_overlap,
            weight_model,
        }
    }
}
