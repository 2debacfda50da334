//! Persistent Connect Four grid.

use im::Vector;

use crate::core::PlayerId;

/// Directions a line can run in: horizontal, vertical, both diagonals.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Grid of cells stored column-major, row 0 at the bottom.
///
/// Backed by `im::Vector`, so cloning a board for a successor position is
/// O(1) and unchanged cells are shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vector<Option<PlayerId>>,
    heights: Vector<u8>,
}

impl Board {
    /// An empty `width` x `height` board.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        let cells = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: std::iter::repeat(None).take(cells).collect(),
            heights: std::iter::repeat(0).take(usize::from(width)).collect(),
        }
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    fn index(&self, column: u8, row: u8) -> usize {
        usize::from(column) * usize::from(self.height) + usize::from(row)
    }

    /// Piece at `(column, row)`, if any. Out-of-board coordinates are empty.
    #[must_use]
    pub fn get(&self, column: u8, row: u8) -> Option<PlayerId> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells[self.index(column, row)]
    }

    /// Number of pieces in `column`.
    #[must_use]
    pub fn column_height(&self, column: u8) -> u8 {
        self.heights.get(usize::from(column)).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_column_full(&self, column: u8) -> bool {
        self.column_height(column) >= self.height
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|c| self.is_column_full(c))
    }

    /// Board with `player`'s piece dropped on top of `column`.
    ///
    /// `column` must exist and have room.
    #[must_use]
    pub fn with_drop(&self, column: u8, player: PlayerId) -> Self {
        let mut next = self.clone();
        let row = self.column_height(column);
        let index = self.index(column, row);
        next.cells.set(index, Some(player));
        next.heights.set(usize::from(column), row + 1);
        next
    }

    /// Board with the bottom piece of `column` removed and the rest shifted
    /// down one row.
    ///
    /// `column` must exist and be non-empty.
    #[must_use]
    pub fn with_pop(&self, column: u8) -> Self {
        let mut next = self.clone();
        let filled = self.column_height(column);
        for row in 1..filled {
            let below = self.index(column, row - 1);
            next.cells.set(below, self.get(column, row));
        }
        let top = self.index(column, filled - 1);
        next.cells.set(top, None);
        next.heights.set(usize::from(column), filled - 1);
        next
    }

    /// Does `player` own a run of at least `line` cells through
    /// `(column, row)`?
    #[must_use]
    pub fn has_line_through(&self, column: u8, row: u8, player: PlayerId, line: u8) -> bool {
        if self.get(column, row) != Some(player) {
            return false;
        }
        DIRECTIONS.iter().any(|&(dc, dr)| {
            let run = 1 + self.run(column, row, dc, dr, player) + self.run(column, row, -dc, -dr, player);
            run >= u32::from(line)
        })
    }

    /// Does `player` own a run of at least `line` cells anywhere?
    #[must_use]
    pub fn has_line(&self, player: PlayerId, line: u8) -> bool {
        self.pieces(player)
            .any(|(column, row)| self.has_line_through(column, row, player, line))
    }

    /// Cells owned by `player`, column by column.
    pub fn pieces(&self, player: PlayerId) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.width).flat_map(move |column| {
            (0..self.column_height(column))
                .filter(move |&row| self.get(column, row) == Some(player))
                .map(move |row| (column, row))
        })
    }

    /// Count consecutive `player` cells from `(column, row)` stepping by
    /// `(dc, dr)`, excluding the start.
    fn run(&self, column: u8, row: u8, dc: i32, dr: i32, player: PlayerId) -> u32 {
        let mut count = 0;
        let mut c = i32::from(column) + dc;
        let mut r = i32::from(row) + dr;
        while (0..i32::from(self.width)).contains(&c)
            && (0..i32::from(self.height)).contains(&r)
            && self.get(c as u8, r as u8) == Some(player)
        {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.height).rev() {
            for column in 0..self.width {
                let symbol = match self.get(column, row) {
                    Some(PlayerId::FIRST) => 'X',
                    Some(_) => 'O',
                    None => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
