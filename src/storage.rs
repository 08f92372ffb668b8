//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, to_string_pretty};

use crate::cluster::Clustering;
use crate::graph::CooccurrenceGraph;

/// Save a clustering run to the specified directory
///
/// Writes `summary.json` with graph and cluster statistics and
/// `communities.json` with the full clustering result.
pub fn save_clustering(
    clustering: &Clustering,
    graph: &CooccurrenceGraph,
    output_dir: &str,
) -> Result<()> {
    log::info!(
        "Saving {} label communities to {}",
        clustering.cluster_count,
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    save_summary(clustering, graph, output_dir)?;
    save_communities(clustering, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

fn save_summary(
    clustering: &Clustering,
    graph: &CooccurrenceGraph,
    output_dir: &str,
) -> Result<()> {
    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let label_count = graph.label_count();
    let summary = json!({
        "graph_stats": {
            "label_count": label_count,
            "edge_count": graph.edge_count(),
            "avg_degree": if label_count > 0 {
                2.0 * graph.edge_count() as f64 / label_count as f64
            } else {
                0.0
            },
        },
        "cluster_stats": {
            "cluster_count": clustering.cluster_count,
            "entropy": clustering.entropy,
            "clustered_labels": clustering.label_sets.iter().map(|set| set.len()).sum::<usize>(),
            "largest_cluster": clustering.label_sets.iter().map(|set| set.len()).max().unwrap_or(0),
        },
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

fn save_communities(clustering: &Clustering, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("communities.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(clustering)?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMap;

    #[test]
    fn writes_summary_and_communities() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().to_str().unwrap();

        let map: EdgeMap = [((0u32, 1u32), 2.0), ((2u32, 3u32), 1.0)]
            .into_iter()
            .collect();
        let graph = CooccurrenceGraph::from_edge_map(4, &map);
        let clustering = Clustering {
            label_sets: vec![vec![0, 1], vec![2, 3]],
            cluster_count: 2,
            entropy: 7.25,
            label_count: 4,
        };

        save_clustering(&clustering, &graph, output_dir).unwrap();

        let summary: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("summary.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(summary["graph_stats"]["label_count"], 4);
        assert_eq!(summary["cluster_stats"]["cluster_count"], 2);

        let restored: Clustering = serde_json::from_str(
            &fs::read_to_string(dir.path().join("communities.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(restored.label_sets, clustering.label_sets);
        assert_eq!(restored.entropy, clustering.entropy);
    }
}
