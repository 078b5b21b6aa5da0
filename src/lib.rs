//! Crate root module declarations for the draughts rules engine.
//!
//! This file exposes the board state machine (piece model, geometry, reversible
//! push/pop, termination checks), the move record and its notation, the
//! move-generator extension point with its perft and playout helpers, and the
//! position notation codec, so variants, search code and tooling can import
//! stable module paths.

pub mod draughts_errors;

pub mod game_state {
    pub mod board_geometry;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_state;
    pub mod termination;
}

pub mod moves {
    pub mod draughts_move;
    pub mod move_notation;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod random_playout;

    #[cfg(test)]
    pub(crate) mod test_generator;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
