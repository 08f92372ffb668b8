//! Undirected weighted graph over label indices

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::graph::EdgeMap;

/// Label co-occurrence graph
///
/// One vertex per label column, one undirected edge per co-occurring label
/// pair. Vertex payloads are the label indices themselves; edge payloads are
/// the co-occurrence weights supplied by the graph builder.
#[derive(Debug, Clone)]
pub struct CooccurrenceGraph {
    graph: UnGraph<u32, f64>,
}

impl CooccurrenceGraph {
    /// Build the graph from a label count and a pair-to-weight map
    ///
    /// Edges are inserted in sorted pair order so edge indices (and the
    /// order of [`edge_weight_values`](Self::edge_weight_values)) do not
    /// depend on map iteration order.
    pub fn from_edge_map(label_count: usize, edge_map: &EdgeMap) -> Self {
        let mut graph = UnGraph::with_capacity(label_count, edge_map.len());

        for label in 0..label_count {
            graph.add_node(label as u32);
        }

        let mut entries: Vec<(&(u32, u32), &f64)> = edge_map.iter().collect();
        entries.sort_by_key(|(pair, _)| **pair);

        for (&(a, b), &weight) in entries {
            graph.add_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize), weight);
        }

        Self { graph }
    }

    /// Number of label vertices
    pub fn label_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of co-occurrence edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Weight of the edge between two labels, if they co-occur
    pub fn weight(&self, a: u32, b: u32) -> Option<f64> {
        self.graph
            .find_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize))
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    /// Number of incident edges of a label vertex
    pub fn degree(&self, label: u32) -> usize {
        self.graph.edges(NodeIndex::new(label as usize)).count()
    }

    /// Edge weights in edge-index order, as handed to weighted solvers
    pub fn edge_weight_values(&self) -> Vec<f64> {
        self.graph.edge_references().map(|edge| *edge.weight()).collect()
    }

    /// Iterate over edges as (label, label, weight) triples
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                edge.source().index() as u32,
                edge.target().index() as u32,
                *edge.weight(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMap;

    fn edge_map(entries: &[((u32, u32), f64)]) -> EdgeMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn empty_map_gives_vertices_and_no_edges() {
        let g = CooccurrenceGraph::from_edge_map(6, &EdgeMap::new());
        assert_eq!(g.label_count(), 6);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edge_weight_values(), Vec::<f64>::new());
    }

    #[test]
    fn edges_carry_weights_both_directions() {
        let g = CooccurrenceGraph::from_edge_map(3, &edge_map(&[((0, 2), 4.0)]));
        assert_eq!(g.weight(0, 2), Some(4.0));
        assert_eq!(g.weight(2, 0), Some(4.0));
        assert_eq!(g.weight(0, 1), None);
    }

    #[test]
    fn edge_order_is_sorted_pair_order() {
        let g = CooccurrenceGraph::from_edge_map(
            4,
            &edge_map(&[((2, 3), 3.0), ((0, 1), 1.0), ((1, 3), 2.0)]),
        );
        assert_eq!(g.edge_weight_values(), vec![1.0, 2.0, 3.0]);
        let edges: Vec<(u32, u32, f64)> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1, 1.0), (1, 3, 2.0), (2, 3, 3.0)]);
    }

    #[test]
    fn degree_counts_incident_edges() {
        let g = CooccurrenceGraph::from_edge_map(
            4,
            &edge_map(&[((0, 1), 1.0), ((1, 2), 1.0)]),
        );
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(3), 0);
    }
}
