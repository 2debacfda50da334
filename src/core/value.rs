//! Per-player position evaluation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Saturating score for a decided game.
///
/// Every terminal win is worth exactly this much to the winner, which keeps it
/// strictly above any finite heuristic advantage.
pub const WIN_SCORE: f64 = f64::INFINITY;

/// Per-player numeric evaluation of a position. Higher is better for each
/// player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardValue(pub PlayerMap<f64>);

impl BoardValue {
    /// Create a value from the first and second player's metrics.
    #[must_use]
    pub const fn new(first: f64, second: f64) -> Self {
        Self(PlayerMap::from_array([first, second]))
    }

    /// Value of a game won by `winner`.
    #[must_use]
    pub fn victory(winner: PlayerId) -> Self {
        let mut values = PlayerMap::with_value(-WIN_SCORE);
        values[winner] = WIN_SCORE;
        Self(values)
    }

    /// Value of a drawn game.
    #[must_use]
    pub const fn draw() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Metric for a single player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> f64 {
        self.0[player]
    }

    /// How far `player` is ahead of the opponent.
    ///
    /// Decided games saturate at `±WIN_SCORE`.
    #[must_use]
    pub fn advantage(&self, player: PlayerId) -> f64 {
        let own = self.0[player];
        let other = self.0[player.opponent()];
        if own == WIN_SCORE {
            WIN_SCORE
        } else if other == WIN_SCORE {
            -WIN_SCORE
        } else {
            own - other
        }
    }

    /// Compare two values from `player`'s point of view.
    #[must_use]
    pub fn compare_for(&self, other: &BoardValue, player: PlayerId) -> Ordering {
        self.advantage(player)
            .partial_cmp(&other.advantage(player))
            .unwrap_or(Ordering::Equal)
    }

    /// True if `self` is strictly better than `other` for `player`.
    #[must_use]
    pub fn is_better_for(&self, other: &BoardValue, player: PlayerId) -> bool {
        self.compare_for(other, player) == Ordering::Greater
    }
}

impl From<[f64; 2]> for BoardValue {
    fn from(values: [f64; 2]) -> Self {
        Self(PlayerMap::from_array(values))
    }
}
