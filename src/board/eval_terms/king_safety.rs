//! King shelter and pawn storm evaluation.
//!
//! Scores the pawns on the three files around a king square, both our own
//! shield and the enemy pawns advancing against it. The king safety term
//! takes the best of the current square and the castling destinations, then
//! subtracts an endgame penalty for the king's distance to its pawns.

use crate::board::masks::{
    forward_ranks, frontmost, relative_rank, FILE_B, FILE_D, KING_ATTACKS, RANK_1, RANK_2, RANK_3,
};
use crate::board::query::PawnBoard;
use crate::board::types::{Bitboard, Color, Piece, Score, Square};
use crate::pawn_hash::Entry;

use super::tables::{
    BLOCKED_STORM, KING_PAWN_DISTANCE, NO_PAWN_DISTANCE, SHELTER_BASE, SHELTER_STRENGTH,
    UNBLOCKED_STORM,
};

/// Shelter bonus and storm penalty for a king of `color` on `ksq`.
///
/// The king does not have to stand there; castling destinations are scored
/// the same way.
#[must_use]
pub fn evaluate_shelter<B: PawnBoard + ?Sized>(pos: &B, color: Color, ksq: Square) -> Score {
    let them = color.opponent();
    let variant = pos.variant();
    let max_rank = variant.max_rank();
    let max_file = variant.max_file();

    // Pawns behind the king do not shelter or storm it
    let pawns = (pos.pieces_both(Piece::Pawn) | pos.pieces_both(Piece::SoftPawn))
        & !forward_ranks(them, ksq.rank());
    let our_pawns = pawns & (pos.pieces(color, Piece::Pawn) | pos.pieces(color, Piece::SoftPawn));
    let their_pawns = pawns & (pos.pieces(them, Piece::Pawn) | pos.pieces(them, Piece::SoftPawn));

    // Rank of the pawn closest to our back rank on a file
    let file_rank = |bb: Bitboard| {
        frontmost(them, bb).map_or(RANK_1, |sq| relative_rank(sq.rank(), color, max_rank))
    };

    let mut bonus = SHELTER_BASE;
    let center = ksq.file().clamp(FILE_B, max_file - 1);
    for f in center - 1..=center + 1 {
        let file = Bitboard::file_mask(f);
        let our_rank = file_rank(our_pawns & file);
        let their_rank = file_rank(their_pawns & file);

        let d = f.min(max_file - f).min(FILE_D);
        let hand_mul = if variant.captures_to_hand() && our_rank <= RANK_2 { 2 } else { 1 };
        bonus += Score::new(SHELTER_STRENGTH[d][our_rank] * hand_mul, 0);

        if our_rank != RANK_1 && our_rank + 1 == their_rank {
            if their_rank == RANK_3 {
                bonus -= BLOCKED_STORM;
            }
        } else {
            bonus -= Score::new(UNBLOCKED_STORM[d][their_rank], 0);
        }
    }

    bonus
}

/// Chebyshev distance from the king to its closest own pawn, capped.
fn min_pawn_distance<B: PawnBoard + ?Sized>(pos: &B, color: Color, ksq: Square) -> usize {
    let pawns = pos.pieces(color, Piece::Pawn);
    if pawns.is_empty() {
        return NO_PAWN_DISTANCE;
    }
    if (pawns & KING_ATTACKS[ksq.as_index()]).any() {
        return 1;
    }
    pawns
        .iter()
        .map(|sq| ksq.distance(sq))
        .min()
        .unwrap_or(NO_PAWN_DISTANCE)
        .min(NO_PAWN_DISTANCE)
}

impl Entry {
    /// King shelter, storm and pawn distance score for one side.
    ///
    /// Records the king square and castling rights it was computed for. This
    /// is the expensive part of king safety; callers should only invoke it
    /// when [`Entry::king_safety_is_stale`] says so.
    pub fn king_safety<B: PawnBoard + ?Sized>(&mut self, pos: &B, color: Color) -> Score {
        let us = color.index();
        let rights = pos.castling_rights().for_color(color);
        let Some(ksq) = pos.king_square(color) else {
            self.king_squares[us] = None;
            self.castling_rights[us] = rights;
            return Score::ZERO;
        };
        self.king_squares[us] = Some(ksq);
        self.castling_rights[us] = rights;

        let variant = pos.variant();
        let back_rank = color.back_rank(variant.max_rank());
        let min_dist = min_pawn_distance(pos, color, ksq);

        let mut shelter = evaluate_shelter(pos, color, ksq);

        // Castling is worth it if the king ends up safer there
        for (kingside, file) in [
            (true, variant.castling_kingside_file()),
            (false, variant.castling_queenside_file()),
        ] {
            if pos.can_castle(color, kingside) {
                let candidate = evaluate_shelter(pos, color, Square(back_rank, file));
                if candidate.mg() > shelter.mg() {
                    shelter = candidate;
                }
            }
        }

        shelter - Score::new(0, KING_PAWN_DISTANCE * min_dist as i32)
    }

    /// Whether the stored king safety inputs differ from the position's.
    #[must_use]
    pub fn king_safety_is_stale<B: PawnBoard + ?Sized>(&self, pos: &B, color: Color) -> bool {
        let us = color.index();
        self.king_squares[us].is_none()
            || self.king_squares[us] != pos.king_square(color)
            || self.castling_rights[us] != pos.castling_rights().for_color(color)
    }
}
