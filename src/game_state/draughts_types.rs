//! Core piece and color model for the compact position buffer.
//!
//! Every cell of a position holds a signed `i8`: the sign carries the color and
//! the magnitude carries the kind (`1` for a man, `KING_MULTIPLIER` for a king).

pub use crate::game_state::game_state::GameState;
pub use crate::moves::draughts_move::Move;

use crate::draughts_errors::{DraughtsErrors, DraughtsResult};
use crate::game_state::draughts_rules::KING_MULTIPLIER;

/// Playable-square index into the position buffer (`0..length`).
pub type Square = u8;

/// Encoded cell value (`0`, `±1` or `±KING_MULTIPLIER`).
pub type Piece = i8;

pub const EMPTY: Piece = 0;
pub const WHITE_MAN: Piece = 1;
pub const BLACK_MAN: Piece = -1;
pub const WHITE_KING: Piece = KING_MULTIPLIER;
pub const BLACK_KING: Piece = -KING_MULTIPLIER;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign used for this color in the position buffer.
    #[inline]
    pub const fn sign(self) -> Piece {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn notation_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn magnitude(self) -> Piece {
        match self {
            PieceKind::Man => 1,
            PieceKind::King => KING_MULTIPLIER,
        }
    }
}

#[inline]
pub const fn encode_piece(color: Color, kind: PieceKind) -> Piece {
    color.sign() * kind.magnitude()
}

/// Decodes a cell value, returning `None` for empty cells and for values outside
/// the encoding.
#[inline]
pub const fn decode_piece(piece: Piece) -> Option<(Color, PieceKind)> {
    match piece {
        WHITE_MAN => Some((Color::White, PieceKind::Man)),
        BLACK_MAN => Some((Color::Black, PieceKind::Man)),
        WHITE_KING => Some((Color::White, PieceKind::King)),
        BLACK_KING => Some((Color::Black, PieceKind::King)),
        _ => None,
    }
}

#[inline]
pub const fn piece_color(piece: Piece) -> Option<Color> {
    match decode_piece(piece) {
        Some((color, _)) => Some(color),
        None => None,
    }
}

#[inline]
pub const fn piece_kind(piece: Piece) -> Option<PieceKind> {
    match decode_piece(piece) {
        Some((_, kind)) => Some(kind),
        None => None,
    }
}

/// Turns the man on `square` into a king of the same color.
pub fn promote(piece: Piece, square: Square) -> DraughtsResult<Piece> {
    match decode_piece(piece) {
        Some((color, PieceKind::Man)) => Ok(encode_piece(color, PieceKind::King)),
        _ => Err(DraughtsErrors::CorruptedPiece((square, piece))),
    }
}

/// Turns the king on `square` back into a man of the same color.
pub fn demote(piece: Piece, square: Square) -> DraughtsResult<Piece> {
    match decode_piece(piece) {
        Some((color, PieceKind::King)) => Ok(encode_piece(color, PieceKind::Man)),
        _ => Err(DraughtsErrors::CorruptedPiece((square, piece))),
    }
}
