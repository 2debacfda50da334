//! MCTS selection policies.
//!
//! Policies are trait-based to allow customization. A policy sees only the
//! visit and reward counters of a node's expanded children.

use super::config::MctsConfig;

/// Counters of one expanded child, as seen by its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeStats {
    /// Times the child was on a search path.
    pub visits: u32,

    /// Summed reward for the player who moved into the child.
    pub total_reward: f64,
}

impl EdgeStats {
    /// Get the mean reward.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }
}

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select a child by index into `children`.
    ///
    /// `children` is never empty.
    fn select(&self, parent_visits: u32, children: &[EdgeStats], config: &MctsConfig) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high reward) with exploration (low visits).
/// Formula: Q(a) + c * sqrt(ln(N) / n(a)). Ties go to the earliest child.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl UCB1 {
    /// UCB1 score of one child.
    #[must_use]
    pub fn score(parent_visits: u32, child: &EdgeStats, exploration_constant: f64) -> f64 {
        if child.visits == 0 {
            return f64::INFINITY;
        }
        let ln_parent = f64::from(parent_visits.max(1)).ln();
        child.mean_reward() + exploration_constant * (ln_parent / f64::from(child.visits)).sqrt()
    }
}

impl SelectionPolicy for UCB1 {
    fn select(&self, parent_visits: u32, children: &[EdgeStats], config: &MctsConfig) -> usize {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, child) in children.iter().enumerate() {
            let score = Self::score(parent_visits, child, config.exploration_constant);
            if score > best_score {
                best = i;
                best_score = score;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(visits: u32, total_reward: f64) -> EdgeStats {
        EdgeStats {
            visits,
            total_reward,
        }
    }

    #[test]
    fn test_ucb1_selects_unvisited() {
        let children = [edge(100, 80.0), edge(10, 7.0), edge(0, 0.0)];
        let selected = UCB1.select(110, &children, &MctsConfig::default());
        assert_eq!(selected, 2);
    }

    #[test]
    fn test_ucb1_prefers_less_visited_at_equal_rate() {
        let children = [edge(40, 20.0), edge(10, 5.0)];
        let selected = UCB1.select(50, &children, &MctsConfig::default());
        assert_eq!(selected, 1);
    }

    #[test]
    fn test_ucb1_exploitation_only() {
        let config = MctsConfig::default().with_exploration(0.0);
        let children = [edge(10, 3.0), edge(10, 7.0), edge(10, 7.0)];

        // Ties go to the first-seen child.
        assert_eq!(UCB1.select(30, &children, &config), 1);
    }

    #[test]
    fn test_mean_reward() {
        assert_eq!(edge(0, 0.0).mean_reward(), 0.0);
        assert_eq!(edge(4, 3.0).mean_reward(), 0.75);
    }
}
