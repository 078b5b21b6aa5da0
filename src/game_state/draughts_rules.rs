//! Canonical draughts rule constants and built-in variant configurations.
//!
//! Holds the king multiplier of the piece encoding and the starting setups
//! used to initialize boards for the supported variants.

use crate::game_state::draughts_types::{Color, Piece, BLACK_MAN, EMPTY, WHITE_MAN};

/// Magnitude of a king in the position buffer (a man is `1`).
pub const KING_MULTIPLIER: Piece = 3;

/// American checkers / English draughts starting position in notation form.
pub const AMERICAN_CHECKERS_STARTING_FEN: &str =
    "[FEN \"B:W21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12\"]";

/// Static description of a draughts variant: its name, PDN game type and
/// starting setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    pub name: &'static str,
    pub game_type: u8,
    pub starting_position: &'static [Piece],
    pub starting_color: Color,
}

const fn starting_position<const N: usize>(men_per_side: usize) -> [Piece; N] {
    let mut out = [EMPTY; N];
    let mut idx = 0;
    while idx < men_per_side {
        out[idx] = BLACK_MAN;
        out[N - 1 - idx] = WHITE_MAN;
        idx += 1;
    }
    out
}

const AMERICAN_CHECKERS_POSITION: [Piece; 32] = starting_position::<32>(12);
const INTERNATIONAL_DRAUGHTS_POSITION: [Piece; 50] = starting_position::<50>(20);

pub const AMERICAN_CHECKERS: VariantConfig = VariantConfig {
    name: "American checkers",
    game_type: 21,
    starting_position: &AMERICAN_CHECKERS_POSITION,
    starting_color: Color::Black,
};

pub const INTERNATIONAL_DRAUGHTS: VariantConfig = VariantConfig {
    name: "International draughts",
    game_type: 20,
    starting_position: &INTERNATIONAL_DRAUGHTS_POSITION,
    starting_color: Color::White,
};

impl VariantConfig {
    /// Number of playable squares.
    #[inline]
    pub fn square_count(&self) -> usize {
        self.starting_position.len()
    }

    /// Board side length `n` derived from `n * n / 2` playable squares.
    pub fn board_size(&self) -> usize {
        integer_sqrt(self.square_count() * 2)
    }

    /// PDN tag block describing the variant.
    pub fn pdn_headers(&self) -> String {
        let size = self.board_size();
        format!(
            "[GameType \"{}\"]\n[Variant \"{}\"]\n[BoardSize \"{size} X {size}\"]\n[StartingColor \"{}\"]\n",
            self.game_type,
            self.name,
            self.starting_color.notation_char()
        )
    }
}

pub(crate) fn integer_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > value) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= value)
    {
        root += 1;
    }
    root
}
