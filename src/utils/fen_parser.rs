//! Notation-to-GameState parser.
//!
//! Accepts the PDN `FEN` tag (`[FEN "W:W21,22,K30:B1,2"]`) or its bare body,
//! case-insensitively. Grammar after upper-casing:
//!
//! ```text
//! body       := turn [':' prefix] (':' segment)* ['.']
//! turn       := 'W' | 'B'
//! prefix     := 'W' | 'B'          duplicated color marker, followed by two segments
//! segment    := ('W' | 'B') [item (',' item)*]
//! item       := ['K'] number | ply-marker
//! ply-marker := ('G' | 'P') digits  move-number / pending-move marker, skipped
//! ```
//!
//! When the prefix is present it is the side to move. Parsing builds a fresh
//! buffer and never touches shared state.

use crate::draughts_errors::{DraughtsResult, NotationError};
use crate::game_state::board_geometry::BoardGeometry;
use crate::game_state::draughts_types::*;

pub fn parse_fen(fen: &str, square_count: usize) -> DraughtsResult<GameState> {
    BoardGeometry::from_square_count(square_count)?;

    let upper = fen.trim().to_ascii_uppercase();
    let body = strip_tag(&upper);

    let fields: Vec<&str> = body
        .split(':')
        .map(str::trim)
        .filter(|field| !is_ply_marker(field))
        .collect();

    let (turn_field, mut rest) = match fields.split_first() {
        Some((first, rest)) if !first.is_empty() => (*first, rest),
        _ => return Err(NotationError::Empty.into()),
    };
    let mut side_to_move =
        parse_turn(turn_field).ok_or_else(|| NotationError::MissingTurn(turn_field.to_owned()))?;

    if rest.len() >= 3 {
        if let Some(prefixed) = parse_turn(rest[0]) {
            side_to_move = prefixed;
            rest = &rest[1..];
        }
    }

    let mut position = vec![EMPTY; square_count];
    let mut seen = [false; 2];
    let mut segments = 0usize;

    for field in rest {
        if segments == 2 {
            return Err(NotationError::TrailingField((*field).to_owned()).into());
        }
        let (color, items) = parse_segment(field)?;
        if seen[color.index()] {
            return Err(NotationError::DuplicateSegment(color.notation_char()).into());
        }
        seen[color.index()] = true;
        segments += 1;
        populate(&mut position, items, color)?;
    }

    if position.iter().all(|&piece| piece == EMPTY) {
        return Err(NotationError::EmptyPosition.into());
    }

    GameState::with_starting_color(position, side_to_move)
}

/// Removes the optional `[FEN "..."]` wrapper and a trailing full stop.
fn strip_tag(notation: &str) -> &str {
    let mut body = notation;
    if let Some(inner) = body.strip_prefix("[FEN") {
        body = inner.trim_start();
        body = body.strip_suffix(']').unwrap_or(body).trim_end();
        body = body.strip_prefix('"').unwrap_or(body);
        body = body.strip_suffix('"').unwrap_or(body);
    }
    let body = body.trim();
    body.strip_suffix('.').unwrap_or(body)
}

fn parse_turn(field: &str) -> Option<Color> {
    match field {
        "W" => Some(Color::White),
        "B" => Some(Color::Black),
        _ => None,
    }
}

fn parse_segment(field: &str) -> Result<(Color, &str), NotationError> {
    let color = match field.chars().next() {
        Some('W') => Color::White,
        Some('B') => Color::Black,
        _ => return Err(NotationError::InvalidSegment(field.to_owned())),
    };
    Ok((color, field[1..].trim()))
}

fn is_ply_marker(item: &str) -> bool {
    match item.strip_prefix('G').or_else(|| item.strip_prefix('P')) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

fn populate(position: &mut [Piece], items: &str, color: Color) -> Result<(), NotationError> {
    if items.is_empty() {
        return Ok(());
    }

    for raw in items.split(',') {
        let item = raw.trim();
        if is_ply_marker(item) {
            continue;
        }

        let (kind, digits) = match item.strip_prefix('K') {
            Some(rest) => (PieceKind::King, rest),
            None => (PieceKind::Man, item),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NotationError::InvalidItem(item.to_owned()));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| NotationError::SquareOutOfRange((u32::MAX, position.len())))?;

        let idx = match usize::try_from(number) {
            Ok(n) if (1..=position.len()).contains(&n) => n - 1,
            _ => return Err(NotationError::SquareOutOfRange((number, position.len()))),
        };
        if position[idx] != EMPTY {
            return Err(NotationError::DuplicateSquare(number));
        }
        position[idx] = encode_piece(color, kind);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::draughts_errors::{DraughtsErrors, NotationError};
    use crate::game_state::draughts_rules::AMERICAN_CHECKERS_STARTING_FEN;
    use crate::game_state::draughts_types::*;

    fn notation_error(fen: &str) -> NotationError {
        match parse_fen(fen, 32) {
            Err(DraughtsErrors::Notation(err)) => err,
            other => panic!("expected a notation error for {fen}, got {other:?}"),
        }
    }

    #[test]
    fn parse_starting_fen() {
        let board = parse_fen(AMERICAN_CHECKERS_STARTING_FEN, 32).expect("starting FEN should parse");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.starting_color(), Color::Black);
        assert_eq!(&board.position()[..12], &[BLACK_MAN; 12]);
        assert_eq!(&board.position()[20..], &[WHITE_MAN; 12]);
        assert!(board.move_stack().is_empty());
    }

    #[test]
    fn parses_kings_and_lowercase_bodies() {
        let board = parse_fen("b:w18,24,27,28,k10,k15:b12,16,20,k22,k25,k29", 32)
            .expect("lowercase bare body");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board[9], WHITE_KING);
        assert_eq!(board[17], WHITE_MAN);
        assert_eq!(board[11], BLACK_MAN);
        assert_eq!(board[28], BLACK_KING);
        assert_eq!(board.pieces().count(), 12);
    }

    #[test]
    fn duplicate_color_prefix_names_the_side_to_move() {
        let board = parse_fen("[FEN \"W:B:W18:B12\"]", 32).expect("prefixed notation");
        assert_eq!(board.side_to_move(), Color::Black);

        let board = parse_fen("[FEN \"B:B:W:B5\"]", 32).expect("prefixed notation, no white");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board[4], BLACK_MAN);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn empty_segment_without_prefix_keeps_the_turn() {
        let board = parse_fen("B:W:B12", 32).expect("white has no pieces");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.pieces().count(), 1);

        let board = parse_fen("W:B3", 32).expect("white segment omitted");
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board[2], BLACK_MAN);
    }

    #[test]
    fn skips_move_number_markers_and_trailing_stop() {
        let board = parse_fen("[FEN \"G12:W:W18,P3,24:B12,G7.\"]", 32).expect("markers skipped");
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board[17], WHITE_MAN);
        assert_eq!(board[23], WHITE_MAN);
        assert_eq!(board[11], BLACK_MAN);
        assert_eq!(board.pieces().count(), 3);
    }

    #[test]
    fn rejects_malformed_notation() {
        assert_eq!(notation_error(""), NotationError::Empty);
        assert_eq!(notation_error("[FEN \"\"]"), NotationError::Empty);
        assert_eq!(
            notation_error("W18,24:B12"),
            NotationError::MissingTurn("W18,24".to_owned())
        );
        assert_eq!(notation_error("W:W:B"), NotationError::EmptyPosition);
        assert_eq!(
            notation_error("W:W18:B33"),
            NotationError::SquareOutOfRange((33, 32))
        );
        assert_eq!(
            notation_error("W:W0:B12"),
            NotationError::SquareOutOfRange((0, 32))
        );
        assert_eq!(
            notation_error("W:W18,X4:B12"),
            NotationError::InvalidItem("X4".to_owned())
        );
        assert_eq!(
            notation_error("W:W18,:B12"),
            NotationError::InvalidItem(String::new())
        );
        assert_eq!(notation_error("W:W18:W12"), NotationError::DuplicateSegment('W'));
        assert_eq!(notation_error("W:W18:B18"), NotationError::DuplicateSquare(18));
        assert_eq!(
            notation_error("W:W18:B12:B13"),
            NotationError::TrailingField("B13".to_owned())
        );
        assert_eq!(
            notation_error("W:X18:B12"),
            NotationError::InvalidSegment("X18".to_owned())
        );
    }

    #[test]
    fn rejects_non_square_boards() {
        assert_eq!(
            parse_fen("W:W1:B2", 17),
            Err(DraughtsErrors::Configuration(17))
        );
        assert_eq!(
            parse_fen("W:W1:B2", usize::MAX),
            Err(DraughtsErrors::Configuration(usize::MAX))
        );
    }
}
