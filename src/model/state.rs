//! Fitted block model state

use serde::{Serialize, Deserialize};

/// Block assignment at one level of a fitted model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockState {
    /// Number of blocks B detected at this level
    pub num_blocks: usize,

    /// Description length of this level
    pub entropy: f64,

    /// One block id per vertex, in vertex-index order
    pub blocks: Vec<u32>,

    /// Per-vertex multi-block membership, recorded by overlapping fits.
    /// A vertex assigned to k blocks lists all k block ids here.
    pub overlap_blocks: Option<Vec<Vec<u32>>>,
}

impl BlockState {
    /// Disjoint state with one block id per vertex
    pub fn disjoint(num_blocks: usize, entropy: f64, blocks: Vec<u32>) -> Self {
        Self {
            num_blocks,
            entropy,
            blocks,
            overlap_blocks: None,
        }
    }

    /// Overlapping state; `blocks` keeps each vertex's first listed block so
    /// the disjoint view stays usable
    pub fn overlapping(num_blocks: usize, entropy: f64, membership: Vec<Vec<u32>>) -> Self {
        let blocks = membership
            .iter()
            .map(|vertex_blocks| vertex_blocks.first().copied().unwrap_or(0))
            .collect();
        Self {
            num_blocks,
            entropy,
            blocks,
            overlap_blocks: Some(membership),
        }
    }
}

/// State returned by a block model solver: a single flat partition or a
/// nested hierarchy of them with the finest level at index 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FittedState {
    Flat(BlockState),
    Nested(Vec<BlockState>),
}

impl FittedState {
    /// The level community extraction operates on: the flat state itself,
    /// or level 0 of the hierarchy. `None` for an empty hierarchy.
    pub fn finest_level(&self) -> Option<&BlockState> {
        match self {
            FittedState::Flat(state) => Some(state),
            FittedState::Nested(levels) => levels.first(),
        }
    }

    /// Total description length: the flat state's entropy, or the sum over
    /// hierarchy levels
    pub fn entropy(&self) -> f64 {
        match self {
            FittedState::Flat(state) => state.entropy,
            FittedState::Nested(levels) => levels.iter().map(|level| level.entropy).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_finest_level_is_the_state() {
        let state = FittedState::Flat(BlockState::disjoint(2, 5.0, vec![0, 1, 0]));
        assert_eq!(state.finest_level().unwrap().num_blocks, 2);
        assert_eq!(state.entropy(), 5.0);
    }

    #[test]
    fn nested_finest_level_is_index_zero() {
        let state = FittedState::Nested(vec![
            BlockState::disjoint(3, 4.0, vec![0, 1, 2]),
            BlockState::disjoint(1, 2.0, vec![0, 0, 0]),
        ]);
        assert_eq!(state.finest_level().unwrap().num_blocks, 3);
        assert_eq!(state.entropy(), 6.0);
    }

    #[test]
    fn empty_hierarchy_has_no_finest_level() {
        let state = FittedState::Nested(Vec::new());
        assert!(state.finest_level().is_none());
    }

    #[test]
    fn overlapping_state_keeps_first_block_in_disjoint_view() {
        let state = BlockState::overlapping(3, 1.0, vec![vec![2, 0], vec![1], vec![]]);
        assert_eq!(state.blocks, vec![2, 1, 0]);
        assert_eq!(
            state.overlap_blocks.as_ref().unwrap()[0],
            vec![2, 0]
        );
    }
}
