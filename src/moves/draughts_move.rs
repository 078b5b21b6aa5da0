//! Move record exchanged between move generators and the board.

use std::fmt;

use crate::game_state::draughts_types::{Piece, Square};

/// A single move: the traversed squares, the captured squares with the piece
/// values they held, and whether the board promoted the moving piece.
///
/// `square_list[0]` is the origin and the last entry the destination; any
/// entries in between are way-points of a multi-leg capture. `captured_list`
/// and `captured_entities` are parallel. `is_promotion` is written by
/// `GameState::push`, never by the producer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub square_list: Vec<Square>,
    pub captured_list: Vec<Square>,
    pub captured_entities: Vec<Piece>,
    pub is_promotion: bool,
}

impl Move {
    /// A quiet move along `square_list`.
    pub fn new(square_list: Vec<Square>) -> Self {
        debug_assert!(square_list.len() >= 2, "a move needs an origin and a destination");
        Self {
            square_list,
            captured_list: Vec::new(),
            captured_entities: Vec::new(),
            is_promotion: false,
        }
    }

    /// A capturing move. Each capture pairs the square with the piece value it
    /// holds before the move.
    pub fn with_captures(square_list: Vec<Square>, captures: &[(Square, Piece)]) -> Self {
        let mut mv = Self::new(square_list);
        mv.captured_list = captures.iter().map(|&(square, _)| square).collect();
        mv.captured_entities = captures.iter().map(|&(_, piece)| piece).collect();
        mv
    }

    #[inline]
    pub fn origin(&self) -> Square {
        self.square_list[0]
    }

    #[inline]
    pub fn destination(&self) -> Square {
        self.square_list[self.square_list.len() - 1]
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured_list.is_empty()
    }

    /// Iterates `(square, piece)` pairs of the captured pieces in capture order.
    pub fn captures(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.captured_list
            .iter()
            .copied()
            .zip(self.captured_entities.iter().copied())
    }
}

impl fmt::Display for Move {
    /// PDN style: 1-based squares joined with `-` for quiet moves and `x` for
    /// captures.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        for (idx, square) in self.square_list.iter().enumerate() {
            if idx > 0 {
                write!(f, "{separator}")?;
            }
            write!(f, "{}", u32::from(*square) + 1)?;
        }
        Ok(())
    }
}
