//! Core reversible board state.
//!
//! `GameState` owns the half-length position buffer, the side to move and the
//! stack of applied moves. It is mutated only through `push` and `pop`, each of
//! which updates the buffer, the stack and the turn together so a search loop
//! can walk a tree in place without copying boards.

use std::fmt;
use std::ops::Index;

use crate::draughts_errors::{DraughtsErrors, DraughtsResult};
use crate::game_state::board_geometry::BoardGeometry;
use crate::game_state::draughts_rules::{VariantConfig, AMERICAN_CHECKERS, AMERICAN_CHECKERS_STARTING_FEN};
use crate::game_state::draughts_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_notation::resolve_move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

/// Board position plus the undo log needed to reverse every applied move.
///
/// Cloning deep-copies the buffer and the stack, which is how parallel search
/// workers should obtain their own board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    position: Vec<Piece>,
    geometry: BoardGeometry,
    side_to_move: Color,
    starting_color: Color,
    move_stack: Vec<Move>,
}

impl GameState {
    /// Builds a board with white to move.
    pub fn new(position: Vec<Piece>) -> DraughtsResult<Self> {
        Self::with_starting_color(position, Color::White)
    }

    /// Builds a board from `position`, which must hold `n * n / 2` cells for
    /// some board size `n`.
    pub fn with_starting_color(position: Vec<Piece>, starting_color: Color) -> DraughtsResult<Self> {
        let geometry = BoardGeometry::from_square_count(position.len())?;
        Ok(Self {
            position,
            geometry,
            side_to_move: starting_color,
            starting_color,
            move_stack: Vec::new(),
        })
    }

    pub fn from_variant(variant: &VariantConfig) -> DraughtsResult<Self> {
        Self::with_starting_color(variant.starting_position.to_vec(), variant.starting_color)
    }

    /// Standard American checkers starting position, black to move.
    pub fn new_game() -> Self {
        parse_fen(AMERICAN_CHECKERS_STARTING_FEN, AMERICAN_CHECKERS.square_count())
            .expect("starting FEN should always parse")
    }

    /// Decodes a position notation string for a board with `square_count`
    /// playable squares.
    #[inline]
    pub fn from_fen(fen: &str, square_count: usize) -> DraughtsResult<Self> {
        parse_fen(fen, square_count)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn position(&self) -> &[Piece] {
        &self.position
    }

    /// Panics if `square` is off the board.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.position[usize::from(square)]
    }

    /// Occupied squares in ascending order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.position
            .iter()
            .enumerate()
            .filter(|(_, &piece)| piece != EMPTY)
            .map(|(idx, &piece)| (idx as Square, piece))
    }

    #[inline]
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.geometry.size(), self.geometry.size())
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn starting_color(&self) -> Color {
        self.starting_color
    }

    #[inline]
    pub fn move_stack(&self) -> &[Move] {
        &self.move_stack
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_stack.last()
    }

    /// Full `n x n` grid for presentation; non-playable cells are empty.
    pub fn display_position(&self) -> Vec<Piece> {
        self.geometry.expand(&self.position)
    }

    /// Builds a move along `square_list` capturing `captured`, recording the
    /// pieces currently on the captured squares.
    pub fn build_move(&self, square_list: Vec<Square>, captured: &[Square]) -> Move {
        let captures: Vec<(Square, Piece)> = captured
            .iter()
            .map(|&square| (square, self.piece_at(square)))
            .collect();
        Move::with_captures(square_list, &captures)
    }

    /// Applies `mv` without checking legality.
    ///
    /// The move generator is trusted: the origin must hold a piece, the
    /// destination must be empty and `captured_entities` must describe the
    /// captured squares. Out-of-range squares panic. A man that lands on its
    /// promotion row is crowned and `mv.is_promotion` is set.
    ///
    /// With `switch_turn == false` the side to move is kept, which lets move
    /// generation probe multi-capture continuations.
    pub fn push(&mut self, mut mv: Move, switch_turn: bool) {
        debug_assert!(mv.square_list.len() >= 2);
        debug_assert_eq!(mv.captured_list.len(), mv.captured_entities.len());

        let from = mv.origin();
        let to = mv.destination();
        self.position.swap(usize::from(from), usize::from(to));

        mv.is_promotion = false;
        let moved = self.piece_at(to);
        if piece_kind(moved) == Some(PieceKind::Man)
            && self.geometry.row_of(to) == self.geometry.promotion_row(moved.signum())
        {
            if let Ok(king) = promote(moved, to) {
                self.position[usize::from(to)] = king;
                mv.is_promotion = true;
            }
        }

        for &square in &mv.captured_list {
            self.position[usize::from(square)] = EMPTY;
        }

        self.move_stack.push(mv);
        if switch_turn {
            self.side_to_move = self.side_to_move.opposite();
        }
    }

    /// Validates `mv` against the current board, then applies it with `push`.
    /// On error the board is untouched.
    pub fn push_checked(&mut self, mv: Move, switch_turn: bool) -> DraughtsResult<()> {
        self.validate_move(&mv)?;
        self.push(mv, switch_turn);
        Ok(())
    }

    /// Reverses the most recent move and hands it back to the caller.
    pub fn pop(&mut self, switch_turn: bool) -> DraughtsResult<Move> {
        let mv = self.move_stack.pop().ok_or(DraughtsErrors::EmptyHistory)?;

        let from = mv.origin();
        let to = mv.destination();

        if mv.is_promotion {
            match demote(self.piece_at(to), to) {
                Ok(man) => self.position[usize::from(to)] = man,
                Err(err) => {
                    self.move_stack.push(mv);
                    return Err(err);
                }
            }
        }

        self.position.swap(usize::from(from), usize::from(to));
        for (square, piece) in mv.captures() {
            self.position[usize::from(square)] = piece;
        }

        if switch_turn {
            self.side_to_move = self.side_to_move.opposite();
        }
        Ok(mv)
    }

    /// Resolves a PDN move string against the generator's legal moves and
    /// pushes the match, ending the turn.
    pub fn push_notation<G>(&mut self, generator: &G, notation: &str) -> DraughtsResult<()>
    where
        G: MoveGenerator + ?Sized,
    {
        let legal_moves = generator.generate_legal_moves(self)?;
        let mv = resolve_move(notation, legal_moves)?;
        self.push(mv, true);
        Ok(())
    }

    fn validate_move(&self, mv: &Move) -> DraughtsResult<()> {
        let length = self.position.len();

        if mv.square_list.len() < 2 {
            return Err(DraughtsErrors::IllegalMove(
                "a move needs an origin and a destination".to_owned(),
            ));
        }
        if mv.captured_list.len() != mv.captured_entities.len() {
            return Err(DraughtsErrors::IllegalMove(format!(
                "{} captured squares but {} captured pieces",
                mv.captured_list.len(),
                mv.captured_entities.len()
            )));
        }
        if let Some(square) = mv
            .square_list
            .iter()
            .chain(mv.captured_list.iter())
            .find(|&&square| usize::from(square) >= length)
        {
            return Err(DraughtsErrors::IllegalMove(format!(
                "square index {square} is off a board of {length} squares"
            )));
        }

        let from = mv.origin();
        let to = mv.destination();
        let mover = self.piece_at(from);
        if piece_color(mover) != Some(self.side_to_move) {
            return Err(DraughtsErrors::IllegalMove(format!(
                "origin {} does not hold a piece of the side to move",
                u32::from(from) + 1
            )));
        }
        if from == to && mv.captured_list.is_empty() {
            return Err(DraughtsErrors::IllegalMove(format!(
                "move from {} to itself captures nothing",
                u32::from(from) + 1
            )));
        }
        if from != to && self.piece_at(to) != EMPTY {
            return Err(DraughtsErrors::IllegalMove(format!(
                "destination {} is occupied",
                u32::from(to) + 1
            )));
        }

        let opponent = self.side_to_move.opposite();
        for (idx, (square, recorded)) in mv.captures().enumerate() {
            if mv.captured_list[..idx].contains(&square) {
                return Err(DraughtsErrors::IllegalMove(format!(
                    "square {} is captured twice",
                    u32::from(square) + 1
                )));
            }
            let actual = self.piece_at(square);
            if actual != recorded {
                return Err(DraughtsErrors::IllegalMove(format!(
                    "captured square {} holds {actual}, move records {recorded}",
                    u32::from(square) + 1
                )));
            }
            if piece_color(actual) != Some(opponent) {
                return Err(DraughtsErrors::IllegalMove(format!(
                    "captured square {} does not hold an opponent piece",
                    u32::from(square) + 1
                )));
            }
        }

        Ok(())
    }
}

/// Panics if the square is off the board; use `position().get` to probe.
impl Index<Square> for GameState {
    type Output = Piece;

    #[inline]
    fn index(&self, square: Square) -> &Piece {
        &self.position[usize::from(square)]
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
