//! Connect Four on a configurable board.
//!
//! Players drop pieces into columns; the first to line up `line` pieces
//! horizontally, vertically, or diagonally wins. With `pop_out` enabled a
//! player may instead remove one of their own pieces from the bottom of a
//! column, shifting the rest down.
//!
//! Moves travel as a single integer: drops on even numbers, pops on odd.

mod board;
mod heuristic;
mod rules;

pub use board::Board;
pub use heuristic::{centre_first, column_weight, CentreControl, ConnectFourMoves};
pub use rules::{ConnectFour, ConnectFourConfig, ConnectFourMove, ConnectFourState, MAX_WIDTH};

use crate::core::DecodingError;
use crate::encoding::{BoundedNumber, Disjunction, Either, Mapped};
use crate::registry::GameBundle;

type Column = Either<u64, u64>;

/// Move encoder: `Drop { column }` as `2 * column`, `Pop { column }` as
/// `2 * column + 1`.
pub type ConnectFourEncoder = Mapped<
    Disjunction<BoundedNumber, BoundedNumber>,
    Column,
    ConnectFourMove,
    fn(&ConnectFourMove) -> Column,
    fn(Column) -> Result<ConnectFourMove, DecodingError>,
>;

/// Build the move encoder.
#[must_use]
pub fn move_encoder() -> ConnectFourEncoder {
    let columns = || BoundedNumber::range(u64::from(MAX_WIDTH));
    let into: fn(&ConnectFourMove) -> Column = |mv| match *mv {
        ConnectFourMove::Drop { column } => Either::Left(u64::from(column)),
        ConnectFourMove::Pop { column } => Either::Right(u64::from(column)),
    };
    // Columns are bounded by MAX_WIDTH, so the narrowing is lossless.
    let from: fn(Column) -> Result<ConnectFourMove, DecodingError> = |column| {
        Ok(match column {
            Either::Left(c) => ConnectFourMove::Drop { column: c as u8 },
            Either::Right(c) => ConnectFourMove::Pop { column: c as u8 },
        })
    };
    Mapped::new(Disjunction::new(columns(), columns()), into, from)
}

/// Registry bundle for Connect Four.
#[must_use]
pub fn bundle() -> GameBundle<ConnectFour, ConnectFourMoves, CentreControl, ConnectFourEncoder> {
    GameBundle::new(
        "connect_four",
        "Connect Four",
        ConnectFour,
        ConnectFourMoves,
        CentreControl,
        move_encoder(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Encoder, NumberEncoder};

    #[test]
    fn test_move_encoding() {
        let encoder = move_encoder();

        assert_eq!(encoder.encode(&ConnectFourMove::Drop { column: 3 }), 6);
        assert_eq!(encoder.encode(&ConnectFourMove::Pop { column: 3 }), 7);
        assert_eq!(encoder.decode(&9).unwrap(), ConnectFourMove::Pop { column: 4 });
        assert_eq!(encoder.max_value(), 19);
        assert!(encoder.decode(&20).is_err());
    }
}
