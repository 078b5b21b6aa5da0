//! Repetition, draw and game-over predicates.

use crate::draughts_errors::DraughtsResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;

/// Minimum stack depth for the repetition heuristic to fire.
const REPETITION_WINDOW: usize = 9;

impl GameState {
    /// True when the last move, the 5th-from-last and the 9th-from-last share
    /// the same square list.
    ///
    /// Compares move identity only; callers needing true position repetition
    /// must hash positions themselves.
    pub fn is_threefold_repetition(&self) -> bool {
        let stack = self.move_stack();
        let len = stack.len();
        if len < REPETITION_WINDOW {
            return false;
        }
        let last = &stack[len - 1].square_list;
        *last == stack[len - 5].square_list && *last == stack[len - 9].square_list
    }

    /// Delegates to the variant's draw rule.
    pub fn is_draw<G>(&self, generator: &G) -> DraughtsResult<bool>
    where
        G: MoveGenerator + ?Sized,
    {
        generator.is_draw(self)
    }

    /// True on a draw or when the side to move has no legal move.
    pub fn is_game_over<G>(&mut self, generator: &G) -> DraughtsResult<bool>
    where
        G: MoveGenerator + ?Sized,
    {
        if generator.is_draw(self)? {
            return Ok(true);
        }
        Ok(generator.generate_legal_moves(self)?.is_empty())
    }
}
