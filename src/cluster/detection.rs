//! Clusterer driving graph construction, model fitting, and extraction

use anyhow::Result;
use ndarray::ArrayView2;

use crate::cluster::Clustering;
use crate::data::SparseLabelMatrix;
use crate::graph::{CooccurrenceGraph, GraphBuilder};
use crate::model::{BlockModelSolver, StochasticBlockModel};

/// Clusters a label space by fitting a stochastic block model to the label
/// co-occurrence graph
///
/// Ties three collaborators together: a [`GraphBuilder`] producing the
/// pair-to-weight edge map, a [`BlockModelSolver`] doing the actual
/// partition search, and a [`StochasticBlockModel`] holding configuration
/// and fitted state. One-shot batch transform: errors from any collaborator
/// abort the call with no partial output.
pub struct SbmCooccurrenceClusterer<B, S> {
    builder: B,
    solver: S,
    model: StochasticBlockModel,
}

impl<B: GraphBuilder, S: BlockModelSolver> SbmCooccurrenceClusterer<B, S> {
    pub fn new(builder: B, solver: S, model: StochasticBlockModel) -> Self {
        Self {
            builder,
            solver,
            model,
        }
    }

    /// The model holder, with whatever state the last fit left in it
    pub fn model(&self) -> &StochasticBlockModel {
        &self.model
    }

    /// Construct the label co-occurrence graph for a label matrix
    ///
    /// One vertex per label column; one weighted edge per entry in the
    /// builder's map. The weights live on the returned graph's edges.
    pub fn build_graph_instance(&self, y: &SparseLabelMatrix) -> Result<CooccurrenceGraph> {
        let edge_map = self.builder.transform(y)?;
        let graph = CooccurrenceGraph::from_edge_map(y.n_labels, &edge_map);

        log::info!(
            "Built co-occurrence graph: {} labels, {} edges",
            graph.label_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Cluster the label space and return the detected label groups
    ///
    /// The feature matrix is ignored; it is accepted for interface symmetry
    /// with clusterers that do condition on features. Whether the graph's
    /// edge weights reach the solver is the model's decision, driven by its
    /// weight-model flag. Empty groups are filtered out of the result.
    pub fn fit_predict(
        &mut self,
        _x: Option<ArrayView2<'_, f64>>,
        y: &SparseLabelMatrix,
    ) -> Result<Clustering> {
        let label_count = y.n_labels;
        let graph = self.build_graph_instance(y)?;

        self.model.fit(&self.solver, &graph)?;

        let label_sets: Vec<Vec<u32>> = self
            .model
            .communities()?
            .into_iter()
            .filter(|community| !community.is_empty())
            .collect();

        log::info!(
            "Detected {} non-empty label communities over {} labels",
            label_sets.len(),
            label_count
        );

        Ok(Clustering {
            cluster_count: label_sets.len(),
            entropy: self.model.entropy()?,
            label_count,
            label_sets,
        })
    }
}
