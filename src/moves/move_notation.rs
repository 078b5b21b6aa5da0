//! Resolves PDN move strings (`9-13`, `22x15x6`) against a legal-move list.

use crate::draughts_errors::{DraughtsErrors, DraughtsResult, NotationError};
use crate::game_state::draughts_types::Square;
use crate::moves::draughts_move::Move;

/// Parses a move string into 0-based squares. Accepts `-` and `x` as
/// separators, case-insensitive.
pub fn parse_move_squares(notation: &str) -> DraughtsResult<Vec<Square>> {
    let trimmed = notation.trim();
    let squares = trimmed
        .split(|c: char| c == '-' || c.eq_ignore_ascii_case(&'x'))
        .map(|item| {
            let number: u32 = item
                .trim()
                .parse()
                .map_err(|_| NotationError::InvalidItem(item.to_owned()))?;
            number
                .checked_sub(1)
                .and_then(|idx| Square::try_from(idx).ok())
                .ok_or_else(|| NotationError::InvalidItem(item.to_owned()))
        })
        .collect::<Result<Vec<Square>, NotationError>>()?;

    if squares.len() < 2 {
        return Err(NotationError::InvalidItem(trimmed.to_owned()).into());
    }
    Ok(squares)
}

/// Finds the single legal move matching `notation`.
///
/// A full path matches exactly. A two-square string also matches a longer
/// capture path with the same origin and destination, as long as that is
/// unique.
pub fn resolve_move<I>(notation: &str, legal_moves: I) -> DraughtsResult<Move>
where
    I: IntoIterator<Item = Move>,
{
    let squares = parse_move_squares(notation)?;
    let short_form = squares.len() == 2;

    let mut exact: Option<Move> = None;
    let mut endpoint_matches: Vec<Move> = Vec::new();

    for mv in legal_moves {
        if mv.square_list == squares {
            if exact.is_some() {
                return Err(DraughtsErrors::AmbiguousMove(notation.to_owned()));
            }
            exact = Some(mv);
        } else if short_form && mv.origin() == squares[0] && mv.destination() == squares[1] {
            endpoint_matches.push(mv);
        }
    }

    if let Some(mv) = exact {
        return Ok(mv);
    }

    match endpoint_matches.len() {
        0 => Err(DraughtsErrors::MoveNotFound(notation.to_owned())),
        1 => Ok(endpoint_matches.remove(0)),
        _ => Err(DraughtsErrors::AmbiguousMove(notation.to_owned())),
    }
}
