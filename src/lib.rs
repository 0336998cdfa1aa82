//! Pawn structure and king shelter evaluation with a per-worker pawn hash
//! cache, for chess and chess variants on boards up to 12x10.

pub mod board;
pub mod pawn_hash;
mod zobrist;

pub use board::{Board, Color, PawnBoard, Piece, Score, Square, Variant};
pub use pawn_hash::{Entry, PawnTable, ProbeStats};
