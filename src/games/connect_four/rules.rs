//! Connect Four rules, with the optional pop-out variant.

use serde::{Deserialize, Serialize};

use crate::core::{
    ConfigDescription, FieldDescription, IllegalMove, NumericRange, PlayerId, RulesConfig,
};
use crate::rules::{GameState, GameStatus, Rules};
use crate::tree::NodeRef;

use super::board::Board;

/// Widest board a config may request.
pub const MAX_WIDTH: u8 = 10;

/// Rules parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourConfig {
    pub width: u8,
    pub height: u8,
    /// Run length that wins.
    pub line: u8,
    /// 1 enables popping your own piece from the bottom of a column.
    pub pop_out: u8,
}

impl ConnectFourConfig {
    #[must_use]
    pub fn pops_allowed(&self) -> bool {
        self.pop_out != 0
    }
}

impl Default for ConnectFourConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 6,
            line: 4,
            pop_out: 0,
        }
    }
}

impl RulesConfig for ConnectFourConfig {
    fn description() -> ConfigDescription {
        let defaults = Self::default();
        ConfigDescription::new()
            .with_field(
                FieldDescription::new(
                    "width",
                    NumericRange::new(4, i64::from(MAX_WIDTH)),
                    i64::from(defaults.width),
                )
                .with_label("Columns"),
            )
            .with_field(
                FieldDescription::new("height", NumericRange::new(4, 10), i64::from(defaults.height))
                    .with_label("Rows"),
            )
            .with_field(
                FieldDescription::new("line", NumericRange::new(3, 6), i64::from(defaults.line))
                    .with_label("Line length to win"),
            )
            .with_field(
                FieldDescription::new("pop_out", NumericRange::new(0, 1), i64::from(defaults.pop_out))
                    .with_label("Pop out"),
            )
    }
}

/// A Connect Four move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectFourMove {
    /// Drop a piece on top of a column.
    Drop { column: u8 },
    /// Remove your own piece from the bottom of a column.
    Pop { column: u8 },
}

impl ConnectFourMove {
    #[must_use]
    pub fn column(&self) -> u8 {
        match *self {
            ConnectFourMove::Drop { column } | ConnectFourMove::Pop { column } => column,
        }
    }
}

/// Position: the grid and the number of moves played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectFourState {
    pub board: Board,
    pub turn: u32,
}

impl GameState for ConnectFourState {
    fn turn(&self) -> u32 {
        self.turn
    }
}

/// Connect Four rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl Rules for ConnectFour {
    type Move = ConnectFourMove;
    type State = ConnectFourState;
    type Config = ConnectFourConfig;

    fn initial_state(&self, config: &ConnectFourConfig) -> ConnectFourState {
        ConnectFourState {
            board: Board::new(config.width, config.height),
            turn: 0,
        }
    }

    fn is_legal(
        &self,
        mv: &ConnectFourMove,
        state: &ConnectFourState,
        config: &ConnectFourConfig,
    ) -> Result<(), IllegalMove> {
        let board = &state.board;
        if is_finished(state, config) {
            return Err(IllegalMove::new("game-over"));
        }
        if mv.column() >= board.width() {
            return Err(IllegalMove::new("column-out-of-range"));
        }

        match *mv {
            ConnectFourMove::Drop { column } => {
                if board.is_column_full(column) {
                    return Err(IllegalMove::new("column-full"));
                }
            }
            ConnectFourMove::Pop { column } => {
                if !config.pops_allowed() {
                    return Err(IllegalMove::new("pop-disabled"));
                }
                if board.get(column, 0) != Some(state.current_player()) {
                    return Err(IllegalMove::new("pop-not-own-piece"));
                }
            }
        }
        Ok(())
    }

    fn apply_legal_move(
        &self,
        mv: &ConnectFourMove,
        state: &ConnectFourState,
        _config: &ConnectFourConfig,
    ) -> ConnectFourState {
        let board = match *mv {
            ConnectFourMove::Drop { column } => state.board.with_drop(column, state.current_player()),
            ConnectFourMove::Pop { column } => state.board.with_pop(column),
        };
        ConnectFourState {
            board,
            turn: state.turn + 1,
        }
    }

    fn game_status(&self, node: NodeRef<'_, Self>, config: &ConnectFourConfig) -> GameStatus {
        let board = &node.state().board;
        let mover = node.current_player().opponent();
        let last_drop = match node.last_move() {
            Some(&ConnectFourMove::Drop { column }) => Some(column),
            _ => None,
        };

        // A drop can only complete lines through the dropped piece.
        let mover_wins = match last_drop {
            Some(column) => {
                board.has_line_through(column, board.column_height(column) - 1, mover, config.line)
            }
            None => board.has_line(mover, config.line),
        };
        if mover_wins {
            // Also covers a pop that completes lines for both players.
            return GameStatus::Victory(mover);
        }

        if last_drop.is_none() && board.has_line(mover.opponent(), config.line) {
            return GameStatus::Victory(mover.opponent());
        }

        if board.is_full() && !can_pop(board, node.current_player(), config) {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }
}

/// Whether `player` owns a bottom piece they may pop.
fn can_pop(board: &Board, player: PlayerId, config: &ConnectFourConfig) -> bool {
    config.pops_allowed() && (0..board.width()).any(|column| board.get(column, 0) == Some(player))
}

/// No move is possible from `state`: a line exists, or the board is full
/// and the player to move cannot pop.
fn is_finished(state: &ConnectFourState, config: &ConnectFourConfig) -> bool {
    let board = &state.board;
    PlayerId::all().any(|player| board.has_line(player, config.line))
        || (board.is_full() && !can_pop(board, state.current_player(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::connect_four::ConnectFourMoves;
    use crate::rules::MoveGenerator;
    use crate::tree::{GameTree, NodeId};

    use ConnectFourMove::{Drop, Pop};

    fn play(
        tree: &mut GameTree<ConnectFour>,
        config: &ConnectFourConfig,
        moves: &[ConnectFourMove],
    ) -> NodeId {
        moves.iter().fold(tree.root(), |node, mv| {
            tree.play(&ConnectFour, config, node, mv).unwrap()
        })
    }

    #[test]
    fn test_vertical_win() {
        let config = ConnectFourConfig::default();
        let mut tree = GameTree::new(&ConnectFour, &config);
        let moves = [
            Drop { column: 0 },
            Drop { column: 1 },
            Drop { column: 0 },
            Drop { column: 1 },
            Drop { column: 0 },
            Drop { column: 1 },
        ];
        let before = play(&mut tree, &config, &moves);
        assert_eq!(tree.node(before).status(), GameStatus::Ongoing);

        let won = tree.play(&ConnectFour, &config, before, &Drop { column: 0 }).unwrap();
        assert_eq!(tree.node(won).status(), GameStatus::Victory(PlayerId::FIRST));
    }

    #[test]
    fn test_illegal_moves() {
        let config = ConnectFourConfig {
            width: 4,
            height: 4,
            ..ConnectFourConfig::default()
        };
        let mut tree = GameTree::new(&ConnectFour, &config);
        let root = tree.root();

        let reason = |tree: &mut GameTree<ConnectFour>, node, mv| {
            tree.play(&ConnectFour, &config, node, &mv).unwrap_err().reason
        };
        assert_eq!(reason(&mut tree, root, Drop { column: 4 }), "column-out-of-range");
        assert_eq!(reason(&mut tree, root, Pop { column: 0 }), "pop-disabled");

        let full = play(&mut tree, &config, &[Drop { column: 2 }; 4]);
        assert_eq!(reason(&mut tree, full, Drop { column: 2 }), "column-full");
    }

    #[test]
    fn test_pop_requires_own_bottom_piece() {
        let config = ConnectFourConfig {
            pop_out: 1,
            ..ConnectFourConfig::default()
        };
        let mut tree = GameTree::new(&ConnectFour, &config);
        let node = play(&mut tree, &config, &[Drop { column: 3 }, Drop { column: 4 }]);

        let err = tree.play(&ConnectFour, &config, node, &Pop { column: 4 }).unwrap_err();
        assert_eq!(err.reason, "pop-not-own-piece");
        let err = tree.play(&ConnectFour, &config, node, &Pop { column: 0 }).unwrap_err();
        assert_eq!(err.reason, "pop-not-own-piece");

        let popped = tree.play(&ConnectFour, &config, node, &Pop { column: 3 }).unwrap();
        let board = &tree.node(popped).state().board;
        assert_eq!(board.column_height(3), 0);
        assert_eq!(board.get(4, 0), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_pop_completing_both_lines_wins_for_popper() {
        let config = ConnectFourConfig {
            width: 4,
            height: 4,
            line: 3,
            pop_out: 1,
        };
        //   before        after popping column 0
        //   X . . .       . . . .
        //   O X X .       X X X .
        //   X O O .       O O O .
        let board = Board::new(4, 4)
            .with_drop(0, PlayerId::FIRST)
            .with_drop(0, PlayerId::SECOND)
            .with_drop(0, PlayerId::FIRST)
            .with_drop(1, PlayerId::SECOND)
            .with_drop(1, PlayerId::FIRST)
            .with_drop(2, PlayerId::SECOND)
            .with_drop(2, PlayerId::FIRST);
        let state = ConnectFourState { board, turn: 6 };
        let mut tree = GameTree::from_state(&ConnectFour, state, &config);
        let root = tree.root();
        assert_eq!(tree.node(root).status(), GameStatus::Ongoing);

        let popped = tree.play(&ConnectFour, &config, root, &Pop { column: 0 }).unwrap();
        let board = &tree.node(popped).state().board;
        assert!(board.has_line(PlayerId::FIRST, 3));
        assert!(board.has_line(PlayerId::SECOND, 3));
        assert_eq!(tree.node(popped).status(), GameStatus::Victory(PlayerId::FIRST));
    }

    #[test]
    fn test_full_board_is_draw() {
        // Five in a row cannot fit on a 4x4 board.
        let config = ConnectFourConfig {
            width: 4,
            height: 4,
            line: 5,
            pop_out: 0,
        };
        let mut tree = GameTree::new(&ConnectFour, &config);
        let moves: Vec<_> = (0..4u8)
            .flat_map(|column| std::iter::repeat(Drop { column }).take(4))
            .collect();
        let (last, rest) = moves.split_last().unwrap();
        let before = play(&mut tree, &config, rest);
        assert_eq!(tree.node(before).status(), GameStatus::Ongoing);

        let end = tree.play(&ConnectFour, &config, before, last).unwrap();
        assert_eq!(tree.node(end).status(), GameStatus::Draw);
        let err = tree.play(&ConnectFour, &config, end, &Drop { column: 0 }).unwrap_err();
        assert_eq!(err.reason, "game-over");
    }

    #[test]
    fn test_full_board_with_pops_continues() {
        let config = ConnectFourConfig {
            width: 4,
            height: 4,
            line: 5,
            pop_out: 1,
        };
        let mut tree = GameTree::new(&ConnectFour, &config);
        // Filling column by column leaves every bottom piece with the first player.
        let moves: Vec<_> = (0..4u8)
            .flat_map(|column| std::iter::repeat(Drop { column }).take(4))
            .collect();
        let full = play(&mut tree, &config, &moves);

        let view = tree.view(full);
        assert!(view.state().board.is_full());
        assert_eq!(view.current_player(), PlayerId::FIRST);
        assert_eq!(view.status(), GameStatus::Ongoing);
        assert_eq!(
            ConnectFourMoves.list_moves(view, &config),
            vec![Pop { column: 2 }, Pop { column: 1 }, Pop { column: 3 }, Pop { column: 0 }]
        );

        // The same board with the second player to move leaves no legal move.
        let stuck = ConnectFourState {
            board: view.state().board.clone(),
            turn: 17,
        };
        assert!(ConnectFour.is_legal(&Pop { column: 0 }, &stuck, &config).is_err());
        let tree = GameTree::from_state(&ConnectFour, stuck, &config);
        assert_eq!(tree.node(tree.root()).status(), GameStatus::Draw);
    }

    #[test]
    fn test_finished_positions_reject_moves() {
        let config = ConnectFourConfig::default();
        let mut tree = GameTree::new(&ConnectFour, &config);
        let won = play(
            &mut tree,
            &config,
            &[
                Drop { column: 0 },
                Drop { column: 1 },
                Drop { column: 0 },
                Drop { column: 1 },
                Drop { column: 0 },
                Drop { column: 1 },
                Drop { column: 0 },
            ],
        );
        let state = tree.node(won).state();

        let err = ConnectFour.is_legal(&Drop { column: 3 }, state, &config).unwrap_err();
        assert_eq!(err.reason, "game-over");
        let err = ConnectFour.is_legal(&Drop { column: 9 }, state, &config).unwrap_err();
        assert_eq!(err.reason, "game-over");
    }

    #[test]
    fn test_config_validation() {
        let defaults = ConnectFourConfig::description().defaults();
        assert_eq!(ConnectFourConfig::from_json(&defaults).unwrap(), ConnectFourConfig::default());

        for invalid in [
            ConnectFourConfig { width: 3, ..ConnectFourConfig::default() },
            ConnectFourConfig { height: 11, ..ConnectFourConfig::default() },
            ConnectFourConfig { line: 7, ..ConnectFourConfig::default() },
            ConnectFourConfig { pop_out: 2, ..ConnectFourConfig::default() },
        ] {
            assert!(invalid.validated().is_err(), "{:?} should be rejected", invalid);
        }
    }
}
