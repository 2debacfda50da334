//! Minimax search options.

use serde::{Deserialize, Serialize};

/// Minimax search options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxOptions {
    /// Plies to search below the root. Must be at least 1.
    pub max_depth: u32,

    /// Enable alpha-beta cutoffs and heuristic-bounds pruning.
    /// Never changes the chosen move or its value.
    pub prune: bool,

    /// Pick uniformly among root moves tied for best instead of the first.
    pub random: bool,

    /// Seed for random tie-breaking.
    pub seed: u64,
}

impl Default for MinimaxOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            prune: true,
            random: false,
            seed: 42,
        }
    }
}

impl MinimaxOptions {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable pruning.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Enable random tie-breaking with the given seed.
    pub fn with_random(mut self, seed: u64) -> Self {
        self.random = true;
        self.seed = seed;
        self
    }
}
