//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
///
/// At least one of `max_iterations` and `time_limit_ms` must be set. When
/// both are set the search stops at whichever runs out first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Iteration budget.
    pub max_iterations: Option<u32>,

    /// Wall-clock budget in milliseconds, checked between iterations.
    pub time_limit_ms: Option<u64>,

    /// Heuristic advantage that maps to a ~73% win estimate.
    /// Larger values flatten the estimate towards 0.5.
    pub value_scale: f64,

    /// Stop once the shared tree holds this many nodes.
    /// Prevents memory exhaustion on large searches.
    pub max_nodes: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            max_iterations: Some(1_000),
            time_limit_ms: None,
            value_scale: 8.0,
            max_nodes: 100_000,
        }
    }
}

impl MctsConfig {
    /// Set a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set the iteration budget.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Set the time budget, keeping any iteration budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(limit.as_millis() as u64);
        self
    }

    /// Set the value scale for heuristic estimates.
    pub fn with_value_scale(mut self, scale: f64) -> Self {
        self.value_scale = scale;
        self
    }

    /// Set the node limit.
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Remove the iteration budget, leaving only the time limit.
    pub fn without_iteration_limit(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    /// True if this config allows at least one iteration.
    ///
    /// An iteration limit of zero allows none, whatever the time limit.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        match (self.max_iterations, self.time_limit_ms) {
            (None, None) => false,
            (Some(0), _) => false,
            _ => true,
        }
    }

    /// The time budget, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}
