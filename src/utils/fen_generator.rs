use std::fmt::Write;

use crate::game_state::draughts_types::*;

/// Encodes the position as a PDN `FEN` tag.
///
/// Layout: `[FEN "<turn>:<turn>:W<white>:B<black>"]`. The turn marker is
/// repeated as the color prefix, squares are 1-based and ascending, and kings
/// carry a `K`.
pub fn generate_fen(game_state: &GameState) -> String {
    let turn = game_state.side_to_move().notation_char();
    let mut out = String::with_capacity(16 + 4 * game_state.pieces().count());

    out.push_str("[FEN \"");
    out.push(turn);
    out.push(':');
    out.push(turn);
    out.push_str(":W");
    write_square_list(&mut out, game_state, Color::White);
    out.push_str(":B");
    write_square_list(&mut out, game_state, Color::Black);
    out.push_str("\"]");

    out
}

fn write_square_list(out: &mut String, game_state: &GameState, color: Color) {
    let mut first = true;

    for (square, piece) in game_state.pieces() {
        let Some((piece_color, kind)) = decode_piece(piece) else {
            continue;
        };
        if piece_color != color {
            continue;
        }
        if !first {
            out.push(',');
        }
        first = false;
        if kind == PieceKind::King {
            out.push('K');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", u32::from(square) + 1);
    }
}
