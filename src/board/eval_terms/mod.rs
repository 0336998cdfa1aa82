//! Pawn evaluation terms.
//!
//! Contains evaluation functions for:
//! - Pawn structure (connected, isolated, backward, doubled, passed pawns)
//! - King shelter and pawn storms

mod king_safety;
mod pawn_structure;
pub mod tables;

pub use king_safety::evaluate_shelter;
pub use pawn_structure::{classify_pawn, evaluate_pawns, PawnClass, PawnFlags};
