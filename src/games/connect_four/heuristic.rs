//! Move ordering and static evaluation for Connect Four.

use crate::core::{BoardValue, PlayerId, PlayerMap};
use crate::rules::{Heuristic, MoveGenerator};
use crate::tree::NodeRef;

use super::rules::{ConnectFour, ConnectFourConfig, ConnectFourMove};

/// Columns ordered from the centre outwards.
#[must_use]
pub fn centre_first(width: u8) -> Vec<u8> {
    let centre = i32::from(width) / 2;
    (0..i32::from(width))
        .map(|i| {
            let offset = if i % 2 == 1 { i / 2 + 1 } else { -(i / 2) };
            centre + if width % 2 == 0 { -offset } else { offset }
        })
        .filter(|c| (0..i32::from(width)).contains(c))
        .map(|c| c as u8)
        .collect()
}

/// Value of owning a cell in `column`: one at the edges, rising by one per
/// column towards the centre.
#[must_use]
pub fn column_weight(width: u8, column: u8) -> f64 {
    let from_edge = column.min(width.saturating_sub(1).saturating_sub(column));
    f64::from(from_edge) + 1.0
}

/// Legal drops, then legal pops, each in centre-first order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFourMoves;

impl MoveGenerator<ConnectFour> for ConnectFourMoves {
    fn list_moves(
        &self,
        node: NodeRef<'_, ConnectFour>,
        config: &ConnectFourConfig,
    ) -> Vec<ConnectFourMove> {
        let board = &node.state().board;
        let order = centre_first(board.width());

        let mut moves: Vec<_> = order
            .iter()
            .filter(|&&column| !board.is_column_full(column))
            .map(|&column| ConnectFourMove::Drop { column })
            .collect();

        if config.pops_allowed() {
            let mover = node.current_player();
            moves.extend(
                order
                    .iter()
                    .filter(|&&column| board.get(column, 0) == Some(mover))
                    .map(|&column| ConnectFourMove::Pop { column }),
            );
        }
        moves
    }
}

/// Rewards central control: each player scores the column weight of every
/// piece they own.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentreControl;

impl Heuristic<ConnectFour> for CentreControl {
    fn board_value(&self, node: NodeRef<'_, ConnectFour>, _config: &ConnectFourConfig) -> BoardValue {
        let board = &node.state().board;
        let score = PlayerMap::new(|player: PlayerId| {
            board
                .pieces(player)
                .map(|(column, _)| column_weight(board.width(), column))
                .sum::<f64>()
        });
        BoardValue(score)
    }

    fn bounds(&self, config: &ConnectFourConfig) -> Option<BoardValue> {
        // Owning every cell while the opponent owns none.
        let total: f64 = (0..config.width)
            .map(|column| column_weight(config.width, column) * f64::from(config.height))
            .sum();
        Some(BoardValue::new(total, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::GameTree;

    #[test]
    fn test_centre_first() {
        assert_eq!(centre_first(7), vec![3, 4, 2, 5, 1, 6, 0]);
        assert_eq!(centre_first(4), vec![2, 1, 3, 0]);
        assert_eq!(centre_first(5), vec![2, 3, 1, 4, 0]);
    }

    #[test]
    fn test_column_weight_peaks_at_centre() {
        let weights: Vec<_> = (0..7).map(|c| column_weight(7, c)).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_move_list() {
        let config = ConnectFourConfig {
            width: 4,
            height: 4,
            pop_out: 1,
            ..ConnectFourConfig::default()
        };
        let mut tree = GameTree::new(&ConnectFour, &config);
        let root = tree.root();
        assert_eq!(ConnectFourMoves.list_moves(tree.view(root), &config).len(), 4);

        let a = tree.child(&ConnectFour, &config, root, &ConnectFourMove::Drop { column: 1 });
        let b = tree.child(&ConnectFour, &config, a, &ConnectFourMove::Drop { column: 2 });
        let moves = ConnectFourMoves.list_moves(tree.view(b), &config);
        assert_eq!(moves.len(), 5);
        assert_eq!(moves.last(), Some(&ConnectFourMove::Pop { column: 1 }));
    }

    #[test]
    fn test_centre_control_value() {
        let config = ConnectFourConfig::default();
        let mut tree = GameTree::new(&ConnectFour, &config);
        let root = tree.root();
        let a = tree.child(&ConnectFour, &config, root, &ConnectFourMove::Drop { column: 3 });
        let b = tree.child(&ConnectFour, &config, a, &ConnectFourMove::Drop { column: 0 });

        let value = CentreControl.board_value(tree.view(b), &config);
        assert_eq!(value.get(PlayerId::FIRST), 4.0);
        assert_eq!(value.get(PlayerId::SECOND), 1.0);
        assert_eq!(value.advantage(PlayerId::FIRST), 3.0);

        let bounds = CentreControl.bounds(&config).unwrap();
        assert_eq!(bounds.get(PlayerId::FIRST), 16.0 * 6.0);
    }
}
