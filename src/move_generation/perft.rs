use std::sync::Arc;
use std::thread;

use crate::draughts_errors::{DraughtsErrors, DraughtsResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub pieces_captured: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.pieces_captured += rhs.pieces_captured;
        self.promotions += rhs.promotions;
    }
}

/// Counts leaf nodes `depth` plies below the current position by walking the
/// tree in place with push/pop. The board is returned unchanged.
pub fn perft<G>(generator: &G, game_state: &mut GameState, depth: u8) -> DraughtsResult<PerftCounts>
where
    G: MoveGenerator + ?Sized,
{
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves across threads, each on its own clone of the board.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator + Send + Sync>,
    game_state: &GameState,
    depth: u8,
) -> DraughtsResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.clone();
    let root_moves = generator.generate_legal_moves(&mut root)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut worker_state = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            worker_state.push(mv, true);
            let result = if depth == 1 {
                tally_leaf(&worker_state, &mut local);
                Ok(())
            } else {
                perft_recurse(generator_ref.as_ref(), &mut worker_state, depth - 1, &mut local)
            };
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| DraughtsErrors::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> DraughtsResult<()>
where
    G: MoveGenerator + ?Sized,
{
    let moves = generator.generate_legal_moves(game_state)?;
    for mv in moves {
        game_state.push(mv, true);
        if depth == 1 {
            tally_leaf(game_state, counts);
        } else {
            perft_recurse(generator, game_state, depth - 1, counts)?;
        }
        game_state.pop(true)?;
    }
    Ok(())
}

/// Counts the move just pushed as a leaf.
fn tally_leaf(game_state: &GameState, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if let Some(mv) = game_state.last_move() {
        if mv.is_capture() {
            counts.captures += 1;
            counts.pieces_captured += mv.captured_list.len();
        }
        if mv.is_promotion {
            counts.promotions += 1;
        }
    }
}
