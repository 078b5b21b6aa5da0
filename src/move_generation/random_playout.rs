//! Uniformly random playouts, the rollout step of Monte Carlo search.
//!
//! Moves stay on the board's stack so the caller decides whether to keep the
//! final position or `unwind` back to where the playout started.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::draughts_errors::DraughtsResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// The side to move had no legal move.
    NoLegalMoves,
    ThreefoldRepetition,
    PlyLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutReport {
    pub plies: usize,
    pub end: PlayoutEnd,
}

pub fn random_playout<G, R>(
    generator: &G,
    game_state: &mut GameState,
    max_plies: usize,
    rng: &mut R,
) -> DraughtsResult<PlayoutReport>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    let mut plies = 0usize;

    while plies < max_plies {
        if game_state.is_threefold_repetition() {
            return Ok(PlayoutReport {
                plies,
                end: PlayoutEnd::ThreefoldRepetition,
            });
        }

        let legal_moves = generator.generate_legal_moves(game_state)?;
        let Some(picked) = legal_moves.as_slice().choose(rng) else {
            return Ok(PlayoutReport {
                plies,
                end: PlayoutEnd::NoLegalMoves,
            });
        };

        game_state.push(picked.clone(), true);
        plies += 1;
    }

    Ok(PlayoutReport {
        plies,
        end: PlayoutEnd::PlyLimit,
    })
}

/// Pops `plies` moves, most recent first, and returns them in pop order.
pub fn unwind(game_state: &mut GameState, plies: usize) -> DraughtsResult<Vec<Move>> {
    let mut popped = Vec::with_capacity(plies);
    for _ in 0..plies {
        popped.push(game_state.pop(true)?);
    }
    Ok(popped)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{random_playout, unwind, PlayoutEnd};
    use crate::draughts_errors::DraughtsErrors;
    use crate::game_state::draughts_types::*;
    use crate::move_generation::test_generator::StepGenerator;

    #[test]
    fn random_games_unwind_to_the_start_position() {
        let generator = StepGenerator::default();

        for seed in 0..32u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = GameState::new_game();
            let start = board.clone();

            let report = random_playout(&generator, &mut board, 200, &mut rng).expect("playout");
            assert_eq!(board.move_stack().len(), report.plies);
            for (_, piece) in board.pieces() {
                assert!(decode_piece(piece).is_some(), "seed {seed}: corrupt cell {piece}");
            }

            let popped = unwind(&mut board, report.plies).expect("unwind");
            assert_eq!(popped.len(), report.plies);
            assert_eq!(board, start, "seed {seed}");
        }
    }

    #[test]
    fn playout_stops_when_no_move_is_left() {
        let mut position = vec![EMPTY; 32];
        position[21] = WHITE_MAN;
        position[17] = BLACK_MAN;
        let mut board = GameState::with_starting_color(position, Color::White).expect("8x8 board");
        let mut rng = StdRng::seed_from_u64(7);

        let report =
            random_playout(&StepGenerator::default(), &mut board, 50, &mut rng).expect("playout");
        assert_eq!(report.plies, 1);
        assert_eq!(report.end, PlayoutEnd::NoLegalMoves);
        assert_eq!(board[14], WHITE_MAN);
    }

    #[test]
    fn playout_respects_the_ply_limit() {
        let mut board = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(3);
        let report =
            random_playout(&StepGenerator::default(), &mut board, 4, &mut rng).expect("playout");
        assert_eq!(report.plies, 4);
        assert_eq!(report.end, PlayoutEnd::PlyLimit);
    }

    #[test]
    fn unwinding_too_far_reports_empty_history() {
        let mut board = GameState::new_game();
        board.push(Move::new(vec![8, 12]), true);
        assert_eq!(unwind(&mut board, 2), Err(DraughtsErrors::EmptyHistory));
        assert!(board.move_stack().is_empty());
    }
}
