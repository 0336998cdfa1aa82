//! Board representation and pawn evaluation terms.
//!
//! Boards of any size from 3x3 to 12x10 share one fixed bitboard layout;
//! the active area comes from the [`Variant`].
//!
//! # Example
//! ```
//! use pawn_eval::board::{evaluate_pawns, Board, Color, PawnBoard, Score};
//! use pawn_eval::Entry;
//!
//! let board = Board::new();
//! let mut entry = Entry::default();
//! let score = evaluate_pawns(&board, Color::White, &mut entry);
//! assert_eq!(score, Score::new(80, -16));
//! assert_eq!(board.count(Color::White, pawn_eval::board::Piece::Pawn), 8);
//! ```

mod builder;
mod error;
mod eval_terms;
mod fen;
pub mod masks;
mod query;
mod state;
mod types;
mod variant;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, SquareError, VariantError};
pub use query::PawnBoard;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Piece, Score, Square, FILE_NB, PIECE_NB,
    RANK_NB, SQUARE_NB,
};
pub use variant::Variant;

// Public API - evaluation terms
pub use eval_terms::tables;
pub use eval_terms::{classify_pawn, evaluate_pawns, evaluate_shelter, PawnClass, PawnFlags};
