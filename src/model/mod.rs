//! Stochastic block model configuration and fitted-state holder

pub mod solver;
pub mod state;

pub use solver::{BlockModelSolver, EdgeWeights, FitOptions};
pub use state::{BlockState, FittedState};

use anyhow::Result;

use crate::cluster::membership::{
    membership_to_communities, overlapping_membership_to_communities,
};
use crate::config::{SbmConfig, WeightModel};
use crate::error::ModelError;
use crate::graph::CooccurrenceGraph;

/// Holds the four model flags and, after fitting, the solver's state
///
/// Configuration is immutable after construction; the fitted state is
/// replaced wholesale on every [`fit`](Self::fit) call.
pub struct StochasticBlockModel {
    config: SbmConfig,
    state: Option<FittedState>,
}

impl StochasticBlockModel {
    /// Create an unfitted model. Flag combinations are not validated; an
    /// inconsistent combination surfaces from the solver, if at all.
    pub fn new(
        nested: bool,
        use_degree_correction: bool,
        allow_overlap: bool,
        weight_model: Option<WeightModel>,
    ) -> Self {
        Self::from_config(SbmConfig::new(
            nested,
            use_degree_correction,
            allow_overlap,
            weight_model,
        ))
    }

    pub fn from_config(config: SbmConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    pub fn config(&self) -> &SbmConfig {
        &self.config
    }

    /// Fit the model to a co-occurrence graph
    ///
    /// Dispatches to the solver's nested or flat entry point on the nested
    /// flag. When a weight model is configured, the graph's edge weights are
    /// forwarded as covariates; otherwise the solver sees no weight
    /// information. Any previously held state is replaced. Solver errors
    /// propagate unmodified.
    pub fn fit<S: BlockModelSolver>(
        &mut self,
        solver: &S,
        graph: &CooccurrenceGraph,
    ) -> Result<&mut Self> {
        let weight_values = graph.edge_weight_values();
        let opts = FitOptions {
            degree_correction: self.config.use_degree_correction,
            overlap: self.config.allow_overlap,
            weights: self.config.weight_model.map(|model| EdgeWeights {
                values: &weight_values,
                model,
            }),
        };

        log::debug!(
            "Fitting {} block model to {} labels, {} edges (weighted: {})",
            if self.config.nested { "nested" } else { "flat" },
            graph.label_count(),
            graph.edge_count(),
            opts.weights.is_some()
        );

        self.state = Some(if self.config.nested {
            FittedState::Nested(solver.minimize_nested(graph, &opts)?)
        } else {
            FittedState::Flat(solver.minimize(graph, &opts)?)
        });

        Ok(self)
    }

    fn fitted_state(&self) -> Result<&FittedState, ModelError> {
        self.state.as_ref().ok_or(ModelError::NotFitted)
    }

    /// Description length of the fitted state
    pub fn entropy(&self) -> Result<f64, ModelError> {
        Ok(self.fitted_state()?.entropy())
    }

    /// Extract label-index groups from the finest level of the fitted state
    ///
    /// Produces B groups indexed by block id. Blocks with no assigned
    /// vertices come back as empty groups; filtering them is the caller's
    /// concern. With overlap allowed, a label assigned to k blocks appears
    /// in k groups.
    pub fn communities(&self) -> Result<Vec<Vec<u32>>, ModelError> {
        let level = self
            .fitted_state()?
            .finest_level()
            .ok_or(ModelError::EmptyHierarchy)?;

        if self.config.allow_overlap {
            let membership = level
                .overlap_blocks
                .as_ref()
                .ok_or(ModelError::MissingOverlapBlocks)?;
            Ok(overlapping_membership_to_communities(
                membership,
                level.num_blocks,
            ))
        } else {
            Ok(membership_to_communities(&level.blocks, level.num_blocks))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMap;

    /// Hands back a canned state and records which entry point ran
    struct CannedSolver {
        state: BlockState,
        levels: Vec<BlockState>,
    }

    impl CannedSolver {
        fn flat(state: BlockState) -> Self {
            Self {
                levels: vec![state.clone()],
                state,
            }
        }
    }

    impl BlockModelSolver for CannedSolver {
        fn minimize(&self, _: &CooccurrenceGraph, _: &FitOptions) -> Result<BlockState> {
            Ok(self.state.clone())
        }

        fn minimize_nested(
            &self,
            _: &CooccurrenceGraph,
            _: &FitOptions,
        ) -> Result<Vec<BlockState>> {
            Ok(self.levels.clone())
        }
    }

    fn graph() -> CooccurrenceGraph {
        let map: EdgeMap = [((0u32, 1u32), 1.0), ((2u32, 3u32), 1.0)]
            .into_iter()
            .collect();
        CooccurrenceGraph::from_edge_map(4, &map)
    }

    #[test]
    fn unfitted_queries_fail() {
        let model = StochasticBlockModel::new(false, true, false, None);
        assert_eq!(model.entropy(), Err(ModelError::NotFitted));
        assert_eq!(model.communities(), Err(ModelError::NotFitted));
    }

    #[test]
    fn fit_replaces_state_and_chains() {
        let solver = CannedSolver::flat(BlockState::disjoint(2, 3.5, vec![0, 0, 1, 1]));
        let mut model = StochasticBlockModel::new(false, true, false, None);

        let communities = model
            .fit(&solver, &graph())
            .unwrap()
            .communities()
            .unwrap();

        assert_eq!(communities, vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(model.entropy().unwrap(), 3.5);

        // A second fit overwrites the first
        let solver = CannedSolver::flat(BlockState::disjoint(1, 1.0, vec![0, 0, 0, 0]));
        model.fit(&solver, &graph()).unwrap();
        assert_eq!(model.communities().unwrap(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn nested_fit_extracts_finest_level() {
        let finest = BlockState::disjoint(2, 2.0, vec![0, 0, 1, 1]);
        let solver = CannedSolver {
            state: finest.clone(),
            levels: vec![finest, BlockState::disjoint(1, 1.0, vec![0, 0])],
        };
        let mut model = StochasticBlockModel::new(true, true, false, None);
        model.fit(&solver, &graph()).unwrap();

        assert_eq!(model.communities().unwrap(), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(model.entropy().unwrap(), 3.0);
    }

    #[test]
    fn empty_hierarchy_is_a_state_defect() {
        let solver = CannedSolver {
            state: BlockState::disjoint(0, 0.0, Vec::new()),
            levels: Vec::new(),
        };
        let mut model = StochasticBlockModel::new(true, true, false, None);
        model.fit(&solver, &graph()).unwrap();
        assert_eq!(model.communities(), Err(ModelError::EmptyHierarchy));
    }

    #[test]
    fn overlap_extraction_requires_overlap_blocks() {
        let solver = CannedSolver::flat(BlockState::disjoint(2, 1.0, vec![0, 0, 1, 1]));
        let mut model = StochasticBlockModel::new(false, true, true, None);
        model.fit(&solver, &graph()).unwrap();
        assert_eq!(model.communities(), Err(ModelError::MissingOverlapBlocks));
    }

    #[test]
    fn overlap_extraction_multi_covers() {
        let solver = CannedSolver::flat(BlockState::overlapping(
            2,
            1.0,
            vec![vec![0], vec![0, 1], vec![1], vec![1]],
        ));
        let mut model = StochasticBlockModel::new(false, true, true, None);
        model.fit(&solver, &graph()).unwrap();

        assert_eq!(
            model.communities().unwrap(),
            vec![vec![0, 1], vec![1, 2, 3]]
        );
    }
}
