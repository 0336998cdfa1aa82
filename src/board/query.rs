//! Read-only position queries needed by the pawn evaluator.
//!
//! The evaluator never touches a concrete board type directly. Anything that
//! can answer these questions (the crate's own [`Board`](super::Board), or an
//! engine's position type) can be probed in a [`PawnTable`](crate::PawnTable).

use super::types::{Bitboard, CastlingRights, Color, Piece, Square};
use super::variant::Variant;

/// Board Query Surface for pawn structure and king shelter scoring.
pub trait PawnBoard {
    /// Geometry and rule flags of the game being played.
    fn variant(&self) -> &Variant;

    /// Squares holding pieces of this color and type.
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard;

    /// Total number of pieces of one color on the board, king included.
    fn piece_count(&self, color: Color) -> u32;

    /// Hash of the primary pawn placement of both colors. Soft pawns do not
    /// contribute.
    fn pawn_key(&self) -> u64;

    /// `None` when the color has no king (some variants allow this).
    fn king_square(&self, color: Color) -> Option<Square>;

    fn castling_rights(&self) -> CastlingRights;

    /// Number of pieces of this color and type.
    #[inline]
    fn count(&self, color: Color, piece: Piece) -> u32 {
        self.pieces(color, piece).popcount()
    }

    /// Pieces of this type for both colors.
    #[inline]
    fn pieces_both(&self, piece: Piece) -> Bitboard {
        self.pieces(Color::White, piece) | self.pieces(Color::Black, piece)
    }

    #[inline]
    fn can_castle(&self, color: Color, kingside: bool) -> bool {
        self.castling_rights().has(color, kingside)
    }
}
