//! Minimal checkers rules for exercising the generator-driven APIs in tests:
//! men step diagonally forward, kings step in any direction, single jumps are
//! mandatory and multi-jumps are not generated.

use crate::draughts_errors::{DraughtsErrors, DraughtsResult};
use crate::game_state::board_geometry::Direction;
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StepGenerator {
    draw_after: Option<usize>,
}

impl StepGenerator {
    /// Declares a draw once the stack reaches `plies` moves or a repetition
    /// occurs.
    pub(crate) fn with_draw_after(plies: usize) -> Self {
        Self {
            draw_after: Some(plies),
        }
    }
}

impl MoveGenerator for StepGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> DraughtsResult<Vec<Move>> {
        let geometry = game_state.geometry();
        let side = game_state.side_to_move();

        let mut quiet = Vec::new();
        let mut captures = Vec::new();

        for (square, piece) in game_state.pieces() {
            if piece_color(piece) != Some(side) {
                continue;
            }
            let directions: &[Direction] = match (side, piece_kind(piece)) {
                (_, Some(PieceKind::King)) => &Direction::ALL,
                (Color::White, _) => &[Direction::UpRight, Direction::UpLeft],
                (Color::Black, _) => &[Direction::DownRight, Direction::DownLeft],
            };

            for &direction in directions {
                let Some(next) = geometry.diagonal_step(square, direction) else {
                    continue;
                };
                let target = game_state.piece_at(next);
                if target == EMPTY {
                    quiet.push(Move::new(vec![square, next]));
                } else if piece_color(target) == Some(side.opposite()) {
                    if let Some(landing) = geometry.diagonal_step(next, direction) {
                        if game_state.piece_at(landing) == EMPTY {
                            captures.push(game_state.build_move(vec![square, landing], &[next]));
                        }
                    }
                }
            }
        }

        Ok(if captures.is_empty() { quiet } else { captures })
    }

    fn is_draw(&self, game_state: &GameState) -> DraughtsResult<bool> {
        match self.draw_after {
            Some(limit) => {
                Ok(game_state.move_stack().len() >= limit || game_state.is_threefold_repetition())
            }
            None => Err(DraughtsErrors::UnsupportedOperation("is_draw")),
        }
    }
}
