//! Errors used throughout the draughts rules engine.
//!
//! `DraughtsErrors` is the single error type returned by board construction,
//! move execution, notation parsing and the move-generator extension point.
//! Notation failures carry a nested `NotationError` so callers can match on
//! the exact malformed production.
//!
//! Usage guidelines:
//! - Input problems (`Configuration`, `Notation`, `MoveNotFound`,
//!   `AmbiguousMove`, `IllegalMove`) are recoverable and suitable for
//!   presenting to end users.
//! - `EmptyHistory` and `UnsupportedOperation` indicate caller protocol
//!   mistakes.
//! - `CorruptedPiece` means the position buffer no longer matches the move
//!   stack and should be treated as a bug.

use std::error::Error;
use std::fmt;

use crate::game_state::draughts_types::Square;

pub type DraughtsResult<T> = Result<T, DraughtsErrors>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraughtsErrors {
    /// The starting position does not describe a square board.
    ///
    /// Payload: the offending buffer length.
    Configuration(usize),

    /// `pop` was called with no moves on the stack.
    EmptyHistory,

    /// A position notation string could not be decoded.
    Notation(NotationError),

    /// A variant did not override an optional rule hook.
    ///
    /// Payload: the name of the missing rule.
    UnsupportedOperation(&'static str),

    /// `push_checked` rejected a move before touching the board.
    IllegalMove(String),

    /// A cell did not hold the piece a promotion or demotion expected.
    ///
    /// Payload: (square, cell value found).
    CorruptedPiece((Square, i8)),

    /// No legal move matches the given move notation.
    MoveNotFound(String),

    /// More than one legal move matches the given move notation.
    AmbiguousMove(String),

    /// A helper reached a state it cannot recover from (for example a
    /// panicked worker thread).
    InvalidState(String),
}

impl fmt::Display for DraughtsErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraughtsErrors::Configuration(length) => write!(
                f,
                "invalid board with {length} squares; the buffer length must be n * n / 2 for an n x n board"
            ),
            DraughtsErrors::EmptyHistory => write!(f, "no moves to pop from the move stack"),
            DraughtsErrors::Notation(err) => write!(f, "invalid notation: {err}"),
            DraughtsErrors::UnsupportedOperation(rule) => {
                write!(f, "rule '{rule}' is not defined for this variant")
            }
            DraughtsErrors::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            DraughtsErrors::CorruptedPiece((square, value)) => write!(
                f,
                "unexpected piece value {value} on square {}",
                u32::from(*square) + 1
            ),
            DraughtsErrors::MoveNotFound(notation) => {
                write!(f, "no legal move matches '{notation}'")
            }
            DraughtsErrors::AmbiguousMove(notation) => {
                write!(f, "more than one legal move matches '{notation}'")
            }
            DraughtsErrors::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl Error for DraughtsErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DraughtsErrors::Notation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NotationError> for DraughtsErrors {
    fn from(err: NotationError) -> Self {
        DraughtsErrors::Notation(err)
    }
}

/// One malformed production of the position notation grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The string is empty once the `[FEN "..."]` wrapper is removed.
    Empty,

    /// The first field is not a `W` or `B` turn marker.
    ///
    /// Payload: the field found instead.
    MissingTurn(String),

    /// Neither color lists a single piece.
    EmptyPosition,

    /// A field does not start with a `W` or `B` color letter.
    InvalidSegment(String),

    /// The same color segment appears twice.
    DuplicateSegment(char),

    /// More fields follow the two color segments.
    TrailingField(String),

    /// A square item is neither `<n>`, `K<n>` nor a move-number marker.
    InvalidItem(String),

    /// A square number is outside `1..=length`.
    ///
    /// Payload: (square number, board length).
    SquareOutOfRange((u32, usize)),

    /// A square is listed more than once.
    DuplicateSquare(u32),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "empty notation string"),
            NotationError::MissingTurn(field) => {
                write!(f, "missing turn marker, found '{field}'")
            }
            NotationError::EmptyPosition => write!(f, "both color lists are empty"),
            NotationError::InvalidSegment(field) => {
                write!(f, "field '{field}' is not a color segment")
            }
            NotationError::DuplicateSegment(color) => {
                write!(f, "color segment '{color}' appears twice")
            }
            NotationError::TrailingField(field) => {
                write!(f, "unexpected trailing field '{field}'")
            }
            NotationError::InvalidItem(item) => write!(f, "invalid square item '{item}'"),
            NotationError::SquareOutOfRange((square, length)) => write!(
                f,
                "square {square} is outside the board range 1..={length}"
            ),
            NotationError::DuplicateSquare(square) => {
                write!(f, "square {square} is listed more than once")
            }
        }
    }
}

impl Error for NotationError {}

#[cfg(test)]
mod tests {
    use super::{DraughtsErrors, NotationError};
    use std::error::Error;

    #[test]
    fn notation_errors_chain_through_source() {
        let err: DraughtsErrors = NotationError::SquareOutOfRange((33, 32)).into();
        assert_eq!(
            err.to_string(),
            "invalid notation: square 33 is outside the board range 1..=32"
        );
        assert!(err.source().is_some());
        assert!(DraughtsErrors::EmptyHistory.source().is_none());
    }

    #[test]
    fn corrupted_piece_reports_one_based_square() {
        let err = DraughtsErrors::CorruptedPiece((4, 1));
        assert_eq!(err.to_string(), "unexpected piece value 1 on square 5");
    }
}
