//! Terminal-oriented Unicode board renderer.
//!
//! Draws the full `n x n` grid from the display projection for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::draughts_types::*;

/// Render the board to a Unicode string, top row (row `0`) first.
///
/// Non-playable cells are blank, empty playable cells are `·`.
pub fn render_game_state(game_state: &GameState) -> String {
    let geometry = game_state.geometry();
    let size = geometry.size();
    let grid = game_state.display_position();
    let mut out = String::new();

    for row in 0..size {
        for column in 0..size {
            let cell = match geometry.square_at(row, column) {
                Some(_) => piece_to_unicode(grid[row * size + column]),
                None => ' ',
            };
            out.push(cell);
            if column + 1 < size {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match decode_piece(piece) {
        Some((Color::White, PieceKind::Man)) => '⛀',
        Some((Color::White, PieceKind::King)) => '⛁',
        Some((Color::Black, PieceKind::Man)) => '⛂',
        Some((Color::Black, PieceKind::King)) => '⛃',
        None => '·',
    }
}
