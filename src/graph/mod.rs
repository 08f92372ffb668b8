//! Label co-occurrence graph construction module

pub mod builder;
pub mod cooccurrence;

pub use builder::{GraphBuilder, LabelCooccurrenceBuilder};
pub use cooccurrence::CooccurrenceGraph;

use std::collections::HashMap;

/// Mapping from unordered label-index pairs to edge weights, as produced by
/// a [`GraphBuilder`]. Pairs are normalized to `(low, high)`.
pub type EdgeMap = HashMap<(u32, u32), f64>;
