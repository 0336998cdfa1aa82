use super::query::PawnBoard;
use super::types::{Bitboard, CastlingRights, Color, Piece, Square, PIECE_NB};
use super::variant::Variant;
use crate::zobrist::{pawn_key, ZOBRIST};

/// A position snapshot: piece placement, castling rights and side to move on
/// a board of any supported size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; PIECE_NB]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) pawn_key: u64, // Zobrist hash of primary pawns
    pub(crate) variant: Variant,
}

impl Board {
    /// Standard chess starting position.
    pub fn new() -> Self {
        let mut board = Board::empty(Variant::chess());
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty(variant: Variant) -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; PIECE_NB]; 2],
            occupied: [Bitboard::EMPTY; 2],
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            pawn_key: ZOBRIST.no_pawns,
            variant,
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// What stands on `sq`, if anything.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let color = Color::BOTH
            .into_iter()
            .find(|c| self.occupied[c.index()].contains(sq))?;
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[color.index()][p.index()].contains(sq))
            .map(|p| (color, p))
    }

    /// Put a piece on `sq`, replacing whatever was there.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(
            self.variant.board_bb().contains(sq),
            "square {sq} is off the board"
        );
        self.remove_piece(sq);
        let bb = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bb;
        self.occupied[color.index()] |= bb;
        if piece == Piece::Pawn {
            self.pawn_key ^= pawn_key(color, sq);
        }
    }

    /// Empty `sq`, returning the piece that stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let (color, piece) = self.piece_at(sq)?;
        let keep = !Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] &= keep;
        self.occupied[color.index()] &= keep;
        if piece == Piece::Pawn {
            self.pawn_key ^= pawn_key(color, sq);
        }
        Some((color, piece))
    }

    /// Recompute the pawn key from scratch.
    pub(crate) fn calculate_pawn_key(&self) -> u64 {
        let mut key = ZOBRIST.no_pawns;
        for color in Color::BOTH {
            for sq in self.pieces[color.index()][Piece::Pawn.index()] {
                key ^= pawn_key(color, sq);
            }
        }
        key
    }

    /// The same position seen from the other side: ranks flipped, colors and
    /// castling rights swapped, opposite side to move.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let max_rank = self.variant.max_rank();
        let mut board = Board::empty(self.variant);
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces[color.index()][piece.index()] {
                    board.set_piece(sq.flip_vertical(max_rank), color.opponent(), piece);
                }
            }
        }
        board.castling_rights = self.castling_rights.swap_colors();
        board.white_to_move = !self.white_to_move;
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PawnBoard for Board {
    #[inline]
    fn variant(&self) -> &Variant {
        &self.variant
    }

    #[inline]
    fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    fn piece_count(&self, color: Color) -> u32 {
        self.occupied[color.index()].popcount()
    }

    #[inline]
    fn pawn_key(&self) -> u64 {
        self.pawn_key
    }

    #[inline]
    fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][Piece::King.index()].lsb()
    }

    #[inline]
    fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_counts() {
        let board = Board::new();
        assert_eq!(board.count(Color::White, Piece::Pawn), 8);
        assert_eq!(board.piece_count(Color::Black), 16);
        assert_eq!(board.king_square(Color::White), Some(Square(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
        assert!(board.can_castle(Color::Black, false));
    }

    #[test]
    fn test_incremental_pawn_key_matches_recomputed() {
        let mut board = Board::new();
        assert_eq!(board.pawn_key(), board.calculate_pawn_key());

        board.remove_piece(Square(1, 4));
        board.set_piece(Square(3, 4), Color::White, Piece::Pawn);
        assert_eq!(board.pawn_key(), board.calculate_pawn_key());

        // Capturing a pawn with a knight drops its key
        board.set_piece(Square(6, 3), Color::White, Piece::Knight);
        assert_eq!(board.pawn_key(), board.calculate_pawn_key());
    }

    #[test]
    fn test_pawn_key_ignores_other_pieces() {
        let mut board = Board::new();
        let before = board.pawn_key();
        board.remove_piece(Square(0, 6));
        board.set_piece(Square(2, 5), Color::White, Piece::SoftPawn);
        assert_eq!(board.pawn_key(), before);
    }

    #[test]
    fn test_empty_board_has_base_key() {
        let board = Board::empty(Variant::chess());
        assert_eq!(board.pawn_key(), ZOBRIST.no_pawns);
        assert_eq!(board.king_square(Color::White), None);
    }

    #[test]
    fn test_mirrored_start_position() {
        let board = Board::new();
        let mirrored = board.mirrored();
        assert_eq!(mirrored.pieces, board.pieces);
        assert_eq!(mirrored.castling_rights, board.castling_rights);
        assert!(!mirrored.white_to_move());
        assert_eq!(mirrored.mirrored(), board);
    }

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square(0, 3)), Some((Color::White, Piece::Queen)));
        assert_eq!(board.piece_at(Square(6, 0)), Some((Color::Black, Piece::Pawn)));
        assert_eq!(board.piece_at(Square(4, 4)), None);
    }
}
