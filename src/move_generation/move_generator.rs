use crate::draughts_errors::{DraughtsErrors, DraughtsResult};
use crate::game_state::game_state::GameState;
use crate::moves::draughts_move::Move;

/// Variant-specific rules the board depends on but does not implement.
///
/// `generate_legal_moves` must return every legal move for the side to move.
/// Implementations may probe continuations with `push(mv, false)` / `pop(false)`
/// but must hand the board back exactly as they received it.
pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> DraughtsResult<Vec<Move>>;

    /// Variant draw rule (move-count limits and the like). Variants that never
    /// override this make every draw query fail.
    fn is_draw(&self, _game_state: &GameState) -> DraughtsResult<bool> {
        Err(DraughtsErrors::UnsupportedOperation("is_draw"))
    }
}
