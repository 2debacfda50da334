//! Take-away: a one-pile subtraction game.
//!
//! Players alternately remove between one and `max_take` objects from a
//! pile; whoever takes the last object wins. A position is lost for the
//! player to move exactly when `remaining % (max_take + 1) == 0`, which makes
//! the game a convenient oracle for engine tests.

use serde::{Deserialize, Serialize};

use crate::core::{
    BoardValue, ConfigDescription, DecodingError, FieldDescription, IllegalMove, NumericRange,
    RulesConfig,
};
use crate::encoding::{BoundedNumber, Mapped};
use crate::registry::GameBundle;
use crate::rules::{GameState, GameStatus, Heuristic, MoveGenerator, Rules};
use crate::tree::NodeRef;

/// Largest `max_take` a config may request.
pub const MAX_TAKE_LIMIT: u32 = 8;

/// Rules parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeAwayConfig {
    /// Objects on the pile at the start.
    pub pile: u32,
    /// Most objects a single move may take.
    pub max_take: u32,
}

impl Default for TakeAwayConfig {
    fn default() -> Self {
        Self { pile: 21, max_take: 3 }
    }
}

impl RulesConfig for TakeAwayConfig {
    fn description() -> ConfigDescription {
        let defaults = Self::default();
        ConfigDescription::new()
            .with_field(
                FieldDescription::new("pile", NumericRange::new(1, 64), i64::from(defaults.pile))
                    .with_label("Pile size"),
            )
            .with_field(
                FieldDescription::new(
                    "max_take",
                    NumericRange::new(1, i64::from(MAX_TAKE_LIMIT)),
                    i64::from(defaults.max_take),
                )
                .with_label("Largest take"),
            )
    }
}

/// Remove this many objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take(pub u32);

/// Position: objects left and moves played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TakeAwayState {
    pub remaining: u32,
    pub turn: u32,
}

impl GameState for TakeAwayState {
    fn turn(&self) -> u32 {
        self.turn
    }
}

/// Take-away rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct TakeAway;

impl Rules for TakeAway {
    type Move = Take;
    type State = TakeAwayState;
    type Config = TakeAwayConfig;

    fn initial_state(&self, config: &TakeAwayConfig) -> TakeAwayState {
        TakeAwayState {
            remaining: config.pile,
            turn: 0,
        }
    }

    fn is_legal(
        &self,
        mv: &Take,
        state: &TakeAwayState,
        config: &TakeAwayConfig,
    ) -> Result<(), IllegalMove> {
        let Take(n) = *mv;
        if state.remaining == 0 {
            return Err(IllegalMove::new("game-over"));
        }
        if n == 0 {
            return Err(IllegalMove::new("take-zero"));
        }
        if n > config.max_take {
            return Err(IllegalMove::new("take-too-many"));
        }
        if n > state.remaining {
            return Err(IllegalMove::new("take-exceeds-pile"));
        }
        Ok(())
    }

    fn apply_legal_move(
        &self,
        mv: &Take,
        state: &TakeAwayState,
        _config: &TakeAwayConfig,
    ) -> TakeAwayState {
        TakeAwayState {
            remaining: state.remaining - mv.0,
            turn: state.turn + 1,
        }
    }

    fn game_status(&self, node: NodeRef<'_, Self>, _config: &TakeAwayConfig) -> GameStatus {
        if node.state().remaining == 0 {
            // The player who just moved took the last object.
            GameStatus::Victory(node.current_player().opponent())
        } else {
            GameStatus::Ongoing
        }
    }
}

/// Lists every legal take, smallest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct TakeAwayMoves;

impl MoveGenerator<TakeAway> for TakeAwayMoves {
    fn list_moves(&self, node: NodeRef<'_, TakeAway>, config: &TakeAwayConfig) -> Vec<Take> {
        let most = config.max_take.min(node.state().remaining);
        (1..=most).map(Take).collect()
    }
}

/// Scores the mover +1 on a winning pile and -1 on a losing one.
#[derive(Clone, Copy, Debug, Default)]
pub struct TakeAwayParity;

impl Heuristic<TakeAway> for TakeAwayParity {
    fn board_value(&self, node: NodeRef<'_, TakeAway>, config: &TakeAwayConfig) -> BoardValue {
        let mover = node.current_player();
        let mut value = BoardValue::draw();
        let winner = if node.state().remaining % (config.max_take + 1) == 0 {
            mover.opponent()
        } else {
            mover
        };
        value.0[winner] = 1.0;
        value
    }

    fn bounds(&self, _config: &TakeAwayConfig) -> Option<BoardValue> {
        Some(BoardValue::new(1.0, 1.0))
    }
}

/// Move encoder: `Take(n)` travels as `n`.
pub type TakeEncoder =
    Mapped<BoundedNumber, u64, Take, fn(&Take) -> u64, fn(u64) -> Result<Take, DecodingError>>;

/// Build the move encoder.
#[must_use]
pub fn take_encoder() -> TakeEncoder {
    let into: fn(&Take) -> u64 = |mv| u64::from(mv.0);
    // Bounded by MAX_TAKE_LIMIT, so the narrowing is lossless.
    let from: fn(u64) -> Result<Take, DecodingError> = |n| Ok(Take(n as u32));
    Mapped::new(BoundedNumber::new(u64::from(MAX_TAKE_LIMIT)), into, from)
}

/// Registry bundle for take-away.
#[must_use]
pub fn bundle() -> GameBundle<TakeAway, TakeAwayMoves, TakeAwayParity, TakeEncoder> {
    GameBundle::new(
        "take_away",
        "Take-away",
        TakeAway,
        TakeAwayMoves,
        TakeAwayParity,
        take_encoder(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::encoding::{Encoder, NumberEncoder};
    use crate::tree::GameTree;

    #[test]
    fn test_legality_reasons() {
        let config = TakeAwayConfig { pile: 2, max_take: 3 };
        let state = TakeAway.initial_state(&config);

        assert!(TakeAway.is_legal(&Take(2), &state, &config).is_ok());
        let reason = |n| TakeAway.is_legal(&Take(n), &state, &config).unwrap_err().reason;
        assert_eq!(reason(0), "take-zero");
        assert_eq!(reason(3), "take-exceeds-pile");
        assert_eq!(reason(4), "take-too-many");

        let finished = TakeAwayState { remaining: 0, turn: 1 };
        let err = TakeAway.is_legal(&Take(1), &finished, &config).unwrap_err();
        assert_eq!(err.reason, "game-over");
    }

    #[test]
    fn test_moves_are_capped_by_pile() {
        let config = TakeAwayConfig { pile: 5, max_take: 3 };
        let mut tree = GameTree::new(&TakeAway, &config);
        let root = tree.root();
        assert_eq!(
            TakeAwayMoves.list_moves(tree.view(root), &config),
            vec![Take(1), Take(2), Take(3)]
        );

        let child = tree.child(&TakeAway, &config, root, &Take(3));
        assert_eq!(
            TakeAwayMoves.list_moves(tree.view(child), &config),
            vec![Take(1), Take(2)]
        );
    }

    #[test]
    fn test_last_take_wins() {
        let config = TakeAwayConfig { pile: 3, max_take: 2 };
        let mut tree = GameTree::new(&TakeAway, &config);
        let a = tree.child(&TakeAway, &config, tree.root(), &Take(1));
        let b = tree.child(&TakeAway, &config, a, &Take(2));

        assert_eq!(tree.node(a).status(), GameStatus::Ongoing);
        assert_eq!(tree.node(b).status(), GameStatus::Victory(PlayerId::SECOND));
    }

    #[test]
    fn test_parity_heuristic() {
        let config = TakeAwayConfig { pile: 4, max_take: 3 };
        let mut tree = GameTree::new(&TakeAway, &config);
        let root = tree.root();

        // Four objects with takes of up to three: the mover loses.
        let value = TakeAwayParity.board_value(tree.view(root), &config);
        assert_eq!(value.advantage(PlayerId::FIRST), -1.0);

        let child = tree.child(&TakeAway, &config, root, &Take(1));
        let value = TakeAwayParity.board_value(tree.view(child), &config);
        assert_eq!(value.advantage(PlayerId::SECOND), 1.0);
    }

    #[test]
    fn test_encoder() {
        let encoder = take_encoder();
        assert_eq!(encoder.max_value(), 8);
        assert_eq!(encoder.encode(&Take(3)), 3);
        assert_eq!(encoder.decode(&3).unwrap(), Take(3));
        assert!(encoder.decode(&9).is_err());
    }

    #[test]
    fn test_config_description() {
        let defaults = TakeAwayConfig::description().defaults();
        assert_eq!(
            TakeAwayConfig::from_json(&defaults).unwrap(),
            TakeAwayConfig::default()
        );
        assert!(TakeAwayConfig { pile: 65, max_take: 3 }.validated().is_err());
        assert!(TakeAwayConfig { pile: 10, max_take: 0 }.validated().is_err());
    }
}
