//! Branch structure and random tree generation

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;

/// One branch of the tree: a leaf count plus an ordered list of sub-branches.
///
/// The sub-branch list is fixed at generation time and never changes
/// afterwards; `leaves` only changes through the fall and grow traversals.
#[derive(Debug, Clone)]
pub struct Branch {
    pub leaves: u32,
    pub sub_branches: Vec<Branch>,
}

impl Branch {
    pub fn new(leaves: u32, sub_branches: Vec<Branch>) -> Self {
        Self {
            leaves,
            sub_branches,
        }
    }

    /// Generate a branch with exactly `sub_count` sub-branches, each of which
    /// gets a random initial leaf count and a random (often zero) sub-branch
    /// count of its own.
    pub fn generate(
        leaves: u32,
        sub_count: usize,
        config: &SimulationConfig,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let sub_branches = (0..sub_count)
            .map(|_| {
                let sub_leaves = rng.gen_range(1..=config.max_initial_leaves);
                let sub_count = rng.gen_range(0..=config.max_sub_branches);
                Self::generate(sub_leaves, sub_count, config, rng)
            })
            .collect();

        Self {
            leaves,
            sub_branches,
        }
    }

    /// Generate the root branch from the configured shape.
    pub fn generate_root(config: &SimulationConfig, rng: &mut ChaCha8Rng) -> Self {
        Self::generate(config.root_leaves, config.root_sub_branches, config, rng)
    }

    /// A twig is a branch with no sub-branches.
    pub fn is_twig(&self) -> bool {
        self.sub_branches.is_empty()
    }

    /// Total leaves across this branch and its whole subtree.
    pub fn total_leaves(&self) -> u32 {
        self.leaves
            + self
                .sub_branches
                .iter()
                .map(Branch::total_leaves)
                .sum::<u32>()
    }

    /// Number of branches in this subtree, including this one.
    pub fn branch_count(&self) -> usize {
        1 + self
            .sub_branches
            .iter()
            .map(Branch::branch_count)
            .sum::<usize>()
    }
}
