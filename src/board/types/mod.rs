//! Core board types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - piece types and colors
//! - `Square` - (rank, file) square on the 12x10 layout
//! - `Bitboard` - 128-bit board representation
//! - `CastlingRights` - castling state
//! - `Score` - two-phase (midgame, endgame) score

mod bitboard;
mod castling;
mod piece;
mod score;
mod square;

// Re-export all public types
pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use piece::{Color, Piece, PIECE_NB};
pub use score::Score;
pub use square::{Square, FILE_NB, RANK_NB, SQUARE_NB};
