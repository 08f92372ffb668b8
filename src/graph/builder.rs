//! Co-occurrence edge map construction

use anyhow::Result;
use itertools::Itertools;
use rayon::prelude::*;

use crate::data::SparseLabelMatrix;
use crate::graph::EdgeMap;

/// Turns a label matrix into a mapping from unordered label-index pairs to
/// numeric edge weights, one entry per co-occurring pair observed across
/// samples.
pub trait GraphBuilder {
    fn transform(&self, y: &SparseLabelMatrix) -> Result<EdgeMap>;
}

/// Scans samples for label pairs that occur together
///
/// In weighted mode each pair's weight is the number of samples carrying
/// both labels; in unweighted mode every observed pair gets weight 1.0.
pub struct LabelCooccurrenceBuilder {
    weighted: bool,
    chunk_size: usize,
}

impl LabelCooccurrenceBuilder {
    pub fn new(weighted: bool) -> Self {
        Self {
            weighted,
            chunk_size: 10_000,
        }
    }

    /// Override the number of samples scanned per parallel chunk
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl GraphBuilder for LabelCooccurrenceBuilder {
    fn transform(&self, y: &SparseLabelMatrix) -> Result<EdgeMap> {
        let (n_samples, n_labels) = y.shape();
        log::debug!(
            "Scanning {} samples over {} labels for co-occurring pairs",
            n_samples,
            n_labels
        );

        let num_chunks = (n_samples + self.chunk_size - 1) / self.chunk_size;

        // Per-chunk pair counts, combined sequentially afterwards
        let chunk_maps: Vec<EdgeMap> = (0..num_chunks)
            .into_par_iter()
            .map(|chunk_idx| {
                let start = chunk_idx * self.chunk_size;
                let end = std::cmp::min(start + self.chunk_size, n_samples);

                let mut local_map = EdgeMap::new();
                for sample in start..end {
                    // Rows are sorted, so tuple_combinations yields (low, high)
                    for (&a, &b) in y.sample_labels(sample).iter().tuple_combinations() {
                        *local_map.entry((a, b)).or_insert(0.0) += 1.0;
                    }
                }

                local_map
            })
            .collect();

        let mut edge_map = EdgeMap::new();
        for chunk_map in chunk_maps {
            for (pair, count) in chunk_map {
                *edge_map.entry(pair).or_insert(0.0) += count;
            }
        }

        if !self.weighted {
            for weight in edge_map.values_mut() {
                *weight = 1.0;
            }
        }

        log::debug!("Found {} co-occurring label pairs", edge_map.len());
        Ok(edge_map)
    }
}
