//! Label space clustering module

pub mod detection;
pub mod membership;

pub use detection::SbmCooccurrenceClusterer;

use serde::{Serialize, Deserialize};

/// Result of one clustering run over a label space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clustering {
    /// Groups of label indices, empty groups removed
    pub label_sets: Vec<Vec<u32>>,

    /// Number of surviving groups
    pub cluster_count: usize,

    /// Description length reported by the solver
    pub entropy: f64,

    /// Number of labels that were clustered
    pub label_count: usize,
}
