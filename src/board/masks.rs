//! Pre-computed bitboard masks and color-relative geometry.
//!
//! Everything here works on the full 12x10 layout. Masks may reach squares
//! that do not exist on a smaller board; callers either intersect them with
//! piece bitboards (which are always on the board) or with
//! `Variant::board_bb`.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square, FILE_NB, SQUARE_NB};

pub const RANK_1: usize = 0;
pub const RANK_2: usize = 1;
pub const RANK_3: usize = 2;
pub const RANK_4: usize = 3;
pub const RANK_5: usize = 4;

pub const FILE_B: usize = 1;
pub const FILE_D: usize = 3;

/// Files adjacent to each file
/// e.g., `ADJACENT_FILES`[3] = files c and e for file d
pub const ADJACENT_FILES: [Bitboard; FILE_NB] = {
    let mut masks = [Bitboard(0); FILE_NB];
    let mut f = 0;
    while f < FILE_NB {
        let mut adj = 0u128;
        if f > 0 {
            adj |= Bitboard::FILE_A.0 << (f - 1);
        }
        if f < FILE_NB - 1 {
            adj |= Bitboard::FILE_A.0 << (f + 1);
        }
        masks[f] = Bitboard(adj);
        f += 1;
    }
    masks
};

/// Squares attacked by a pawn of each color standing on each square
pub static PAWN_ATTACKS: Lazy<[[Bitboard; SQUARE_NB]; 2]> = Lazy::new(|| {
    let mut attacks = [[Bitboard::EMPTY; SQUARE_NB]; 2];
    for color in Color::BOTH {
        for (sq, slot) in attacks[color.index()].iter_mut().enumerate() {
            *slot = pawn_attacks_bb(color, Bitboard::from_square(Square::from_index(sq)));
        }
    }
    attacks
});

/// Squares a king can step to from each square
pub static KING_ATTACKS: Lazy<[Bitboard; SQUARE_NB]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; SQUARE_NB];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let bb = Bitboard::from_square(Square::from_index(sq));
        let row = bb | bb.shift_east() | bb.shift_west();
        *slot = (row | row.shift_north() | row.shift_south()) & !bb;
    }
    attacks
});

/// Get the relative rank for a color (0 = that color's back rank)
#[inline]
#[must_use]
pub const fn relative_rank(rank: usize, color: Color, max_rank: usize) -> usize {
    match color {
        Color::White => rank,
        Color::Black => max_rank - rank,
    }
}

/// All ranks strictly ahead of `rank` from `color`'s point of view
#[inline]
#[must_use]
pub const fn forward_ranks(color: Color, rank: usize) -> Bitboard {
    match color {
        Color::White => Bitboard(Bitboard::ALL.0 & !((1u128 << ((rank + 1) * FILE_NB)) - 1)),
        Color::Black => Bitboard((1u128 << (rank * FILE_NB)) - 1),
    }
}

/// Squares ahead of `sq` on its own file
#[inline]
#[must_use]
pub const fn forward_file(color: Color, sq: Square) -> Bitboard {
    Bitboard(forward_ranks(color, sq.rank()).0 & Bitboard::file_mask(sq.file()).0)
}

/// Every square a pawn on `sq` could attack while advancing
#[inline]
#[must_use]
pub const fn pawn_attack_span(color: Color, sq: Square) -> Bitboard {
    Bitboard(forward_ranks(color, sq.rank()).0 & ADJACENT_FILES[sq.file()].0)
}

/// Squares where an enemy pawn can stop a pawn on `sq` from promoting
#[inline]
#[must_use]
pub const fn passed_pawn_span(color: Color, sq: Square) -> Bitboard {
    Bitboard(pawn_attack_span(color, sq).0 | forward_file(color, sq).0)
}

/// Move every pawn one rank forward
#[inline]
#[must_use]
pub const fn pawn_push(color: Color, bb: Bitboard) -> Bitboard {
    match color {
        Color::White => bb.shift_north(),
        Color::Black => bb.shift_south(),
    }
}

/// Squares attacked by any pawn in `bb`
#[inline]
#[must_use]
pub const fn pawn_attacks_bb(color: Color, bb: Bitboard) -> Bitboard {
    let pushed = pawn_push(color, bb);
    Bitboard(pushed.shift_east().0 | pushed.shift_west().0)
}

/// Squares attacked by two pawns in `bb`
#[inline]
#[must_use]
pub const fn pawn_double_attacks_bb(color: Color, bb: Bitboard) -> Bitboard {
    let pushed = pawn_push(color, bb);
    Bitboard(pushed.shift_east().0 & pushed.shift_west().0)
}

/// The square directly in front of `sq`, if it is on a board whose last
/// rank is `max_rank`
#[inline]
#[must_use]
pub const fn forward_square(color: Color, sq: Square, max_rank: usize) -> Option<Square> {
    match color {
        Color::White if sq.rank() < max_rank => Some(Square(sq.rank() + 1, sq.file())),
        Color::Black if sq.rank() > 0 => Some(Square(sq.rank() - 1, sq.file())),
        _ => None,
    }
}

/// The most advanced square of `bb` from `color`'s point of view
#[inline]
#[must_use]
pub fn frontmost(color: Color, bb: Bitboard) -> Option<Square> {
    match color {
        Color::White => bb.msb(),
        Color::Black => bb.lsb(),
    }
}
