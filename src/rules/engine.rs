//! Rules, move generation, and heuristic traits for game implementations.
//!
//! A game plugs into the search engines by implementing three traits:
//! - `Rules`: the initial position, legality, transitions, and game status
//! - `MoveGenerator`: enumerates legal moves for a node
//! - `Heuristic`: evaluates non-terminal positions
//!
//! The engines are fully generic over these and never interpret
//! game-specific concepts directly.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::{BoardValue, IllegalMove, PlayerId, RulesConfig};
use crate::tree::NodeRef;

/// Status of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Play continues.
    Ongoing,
    /// Game ended without a winner.
    Draw,
    /// Game ended with a winner.
    Victory(PlayerId),
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Victory(player) => Some(*player),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }

    /// Saturating value of a finished game; `None` while ongoing.
    #[must_use]
    pub fn terminal_value(&self) -> Option<BoardValue> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Draw => Some(BoardValue::draw()),
            GameStatus::Victory(player) => Some(BoardValue::victory(*player)),
        }
    }
}

/// An immutable position snapshot.
pub trait GameState: Clone + Debug + PartialEq {
    /// Number of moves played so far.
    fn turn(&self) -> u32;

    /// Player to move, by turn parity.
    fn current_player(&self) -> PlayerId {
        PlayerId::from_turn(self.turn())
    }
}

/// Rules trait.
///
/// ## Implementation Notes
///
/// - States are produced only by `initial_state` and `apply_legal_move`
/// - `apply_legal_move` must not fail once `is_legal` succeeded
/// - `game_status` returns `Ongoing` unless the game has ended
pub trait Rules: Sized {
    /// A single legal transition. Value-equal moves are interchangeable.
    type Move: Clone + Debug + Eq + Hash + 'static;

    /// Position snapshot.
    type State: GameState + 'static;

    /// Rules parameters.
    type Config: RulesConfig;

    /// Starting position for the given config.
    fn initial_state(&self, config: &Self::Config) -> Self::State;

    /// Check whether `mv` may be played from `state`.
    fn is_legal(
        &self,
        mv: &Self::Move,
        state: &Self::State,
        config: &Self::Config,
    ) -> Result<(), IllegalMove>;

    /// Apply a move already known to be legal.
    fn apply_legal_move(
        &self,
        mv: &Self::Move,
        state: &Self::State,
        config: &Self::Config,
    ) -> Self::State;

    /// Status of the position at `node`.
    fn game_status(&self, node: NodeRef<'_, Self>, config: &Self::Config) -> GameStatus;
}

/// Enumerates legal moves.
pub trait MoveGenerator<R: Rules> {
    /// All moves to consider from `node`, in preference order.
    ///
    /// Every returned move must be legal. Returning every legal move is not
    /// required.
    fn list_moves(&self, node: NodeRef<'_, R>, config: &R::Config) -> Vec<R::Move>;
}

/// Static evaluation of positions.
pub trait Heuristic<R: Rules> {
    /// Evaluate the position at `node`.
    fn board_value(&self, node: NodeRef<'_, R>, config: &R::Config) -> BoardValue;

    /// Upper bounds on `board_value(..).advantage(player)` over every
    /// non-terminal position, per player.
    ///
    /// Used by minimax to skip moves that cannot improve on the current best.
    fn bounds(&self, _config: &R::Config) -> Option<BoardValue> {
        None
    }
}
