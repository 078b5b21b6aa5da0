//! Size-dependent square geometry.
//!
//! Only playable (dark) squares are stored in a position buffer, `n / 2` per
//! row. Even rows start with a non-playable cell and odd rows with a playable
//! one, so index `0` is the second cell of the top row. Everything here is a
//! pure function of the board size and is never stored per cell.

use crate::draughts_errors::{DraughtsErrors, DraughtsResult};
use crate::game_state::draughts_rules::integer_sqrt;
use crate::game_state::draughts_types::{Piece, Square, EMPTY};

/// Diagonal step directions. `Up` points toward row `0`, the white back row
/// of the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    #[inline]
    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    size: usize,
}

impl BoardGeometry {
    /// Validates that `square_count` playable squares form an `n x n` board.
    pub fn from_square_count(square_count: usize) -> DraughtsResult<Self> {
        if square_count == 0 || square_count > usize::from(Square::MAX) + 1 {
            return Err(DraughtsErrors::Configuration(square_count));
        }
        let doubled = square_count * 2;
        let size = integer_sqrt(doubled);
        if size * size != doubled {
            return Err(DraughtsErrors::Configuration(square_count));
        }
        Ok(Self { size })
    }

    /// Side length `n`.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn square_count(&self) -> usize {
        self.size * self.size / 2
    }

    #[inline]
    const fn squares_per_row(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub const fn row_of(&self, square: Square) -> usize {
        square as usize / self.squares_per_row()
    }

    #[inline]
    pub const fn column_of(&self, square: Square) -> usize {
        let offset = if self.row_of(square) % 2 == 0 { 1 } else { 0 };
        2 * (square as usize % self.squares_per_row()) + offset
    }

    /// Maps a full-grid cell back to its buffer index; `None` for cells off the
    /// board and for non-playable cells.
    pub fn square_at(&self, row: usize, column: usize) -> Option<Square> {
        if row >= self.size || column >= self.size || (row + column) % 2 == 0 {
            return None;
        }
        Square::try_from(row * self.squares_per_row() + column / 2).ok()
    }

    /// The neighbouring square one diagonal step away.
    pub fn diagonal_step(&self, square: Square, direction: Direction) -> Option<Square> {
        let (d_row, d_col) = direction.delta();
        let row = self.row_of(square).checked_add_signed(d_row)?;
        let column = self.column_of(square).checked_add_signed(d_col)?;
        self.square_at(row, column)
    }

    /// All squares along a diagonal, nearest first, excluding `square` itself.
    pub fn diagonal_ray(
        &self,
        square: Square,
        direction: Direction,
    ) -> impl Iterator<Item = Square> + '_ {
        std::iter::successors(self.diagonal_step(square, direction), move |&sq| {
            self.diagonal_step(sq, direction)
        })
    }

    /// Row a man of the given sign promotes on.
    #[inline]
    pub const fn promotion_row(&self, sign: Piece) -> usize {
        if sign > 0 {
            0
        } else {
            self.size - 1
        }
    }

    /// Expands a half-length position onto the full `n x n` grid, row-major,
    /// with non-playable cells set to empty.
    pub fn expand(&self, position: &[Piece]) -> Vec<Piece> {
        let mut grid = vec![EMPTY; self.size * self.size];
        for (idx, &piece) in position.iter().enumerate().take(self.square_count()) {
            let square = idx as Square;
            grid[self.row_of(square) * self.size + self.column_of(square)] = piece;
        }
        grid
    }
}
