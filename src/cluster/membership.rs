//! Membership-vector-to-groups transforms
//!
//! Pure inverse-index constructions with no graph or solver dependency.
//! Blocks with no assigned vertices come back as empty groups; callers
//! decide whether to filter them.

/// Group vertex indices by their assigned block id
///
/// Returns `num_communities` groups indexed by block id. Each vertex index
/// appears in exactly one group.
pub fn membership_to_communities(membership: &[u32], num_communities: usize) -> Vec<Vec<u32>> {
    let mut communities = vec![Vec::new(); num_communities];

    for (vertex, &block) in membership.iter().enumerate() {
        communities[block as usize].push(vertex as u32);
    }

    communities
}

/// Group vertex indices by overlapping block membership
///
/// A vertex listing k blocks appears in k groups.
pub fn overlapping_membership_to_communities(
    membership: &[Vec<u32>],
    num_communities: usize,
) -> Vec<Vec<u32>> {
    let mut communities = vec![Vec::new(); num_communities];

    for (vertex, blocks) in membership.iter().enumerate() {
        for &block in blocks {
            communities[block as usize].push(vertex as u32);
        }
    }

    communities
}
