//! Zobrist keys for pawn structure hashing.
//!
//! Only primary pawns are keyed. Soft pawns are deliberately absent, which is
//! why the pawn table recomputes whenever one is on the board.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Square, SQUARE_NB};

pub(crate) struct ZobristKeys {
    // pawn_keys[color][square_index]
    pub(crate) pawn_keys: [[u64; SQUARE_NB]; 2],
    /// Base key, so a pawnless position does not hash to 0
    pub(crate) no_pawns: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut pawn_keys = [[0; SQUARE_NB]; 2];

        for color in &mut pawn_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let no_pawns = rng.gen();

        ZobristKeys {
            pawn_keys,
            no_pawns,
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Key contribution of a pawn of `color` on `sq`.
#[inline]
pub(crate) fn pawn_key(color: Color, sq: Square) -> u64 {
    ZOBRIST.pawn_keys[color.index()][sq.as_index()]
}
