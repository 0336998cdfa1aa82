//! Bitboard type and operations.
//!
//! One bit per square of the 12x10 layout (bit = rank * 12 + file). The top
//! eight bits of the `u128` are never set.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use super::square::{Square, FILE_NB, RANK_NB, SQUARE_NB};

/// A 128-bit bitboard representing piece positions or attack squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u128);

const fn file_a_bits() -> u128 {
    let mut bits = 0u128;
    let mut r = 0;
    while r < RANK_NB {
        bits |= 1u128 << (r * FILE_NB);
        r += 1;
    }
    bits
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    /// Every square of the layout
    pub const ALL: Bitboard = Bitboard((1u128 << SQUARE_NB) - 1);

    pub const FILE_A: Bitboard = Bitboard(file_a_bits());
    /// Last file of the layout (file l)
    pub const FILE_LAST: Bitboard = Bitboard(file_a_bits() << (FILE_NB - 1));
    pub const RANK_1: Bitboard = Bitboard((1u128 << FILE_NB) - 1);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u128 << sq.as_index())
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if at least one bit is set
    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if more than one bit is set
    #[inline]
    #[must_use]
    pub const fn more_than_one(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.as_index())) != 0
    }

    /// Lowest set square (closest to a1)
    #[inline]
    #[must_use]
    pub fn lsb(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index(self.0.trailing_zeros() as usize))
        }
    }

    /// Highest set square (closest to the last rank)
    #[inline]
    #[must_use]
    pub fn msb(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index(127 - self.0.leading_zeros() as usize))
        }
    }

    /// Shift all bits north (toward the last rank)
    #[inline]
    #[must_use]
    pub const fn shift_north(self) -> Self {
        Bitboard((self.0 << FILE_NB) & Self::ALL.0)
    }

    /// Shift all bits south (toward rank 1)
    #[inline]
    #[must_use]
    pub const fn shift_south(self) -> Self {
        Bitboard(self.0 >> FILE_NB)
    }

    /// Shift all bits east, masking off the wraparound into file a
    #[inline]
    #[must_use]
    pub const fn shift_east(self) -> Self {
        Bitboard((self.0 << 1) & !Self::FILE_A.0 & Self::ALL.0)
    }

    /// Shift all bits west, masking off the wraparound into the last file
    #[inline]
    #[must_use]
    pub const fn shift_west(self) -> Self {
        Bitboard((self.0 >> 1) & !Self::FILE_LAST.0)
    }

    /// Get the file mask for a given file index
    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * FILE_NB))
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    /// Complement within the 12x10 layout
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0 & Self::ALL.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Square::from_index(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert_eq!(Bitboard::FILE_A.popcount(), RANK_NB as u32);
        assert_eq!(Bitboard::RANK_1.popcount(), FILE_NB as u32);
        assert_eq!(Bitboard::ALL.popcount(), SQUARE_NB as u32);
        assert!(Bitboard::file_mask(11).contains(Square(9, 11)));
        assert!(Bitboard::rank_mask(9).contains(Square(9, 0)));
    }

    #[test]
    fn test_shifts_do_not_wrap() {
        let last_file = Bitboard::from_square(Square(3, 11));
        assert!(last_file.shift_east().is_empty());

        let file_a = Bitboard::from_square(Square(3, 0));
        assert!(file_a.shift_west().is_empty());

        let top = Bitboard::from_square(Square(9, 5));
        assert!(top.shift_north().is_empty());

        let bottom = Bitboard::from_square(Square(0, 5));
        assert!(bottom.shift_south().is_empty());

        let mid = Bitboard::from_square(Square(4, 4));
        assert_eq!(mid.shift_north(), Bitboard::from_square(Square(5, 4)));
        assert_eq!(mid.shift_east(), Bitboard::from_square(Square(4, 5)));
    }

    #[test]
    fn test_lsb_msb() {
        let bb = Bitboard::from_square(Square(1, 3)) | Bitboard::from_square(Square(6, 3));
        assert_eq!(bb.lsb(), Some(Square(1, 3)));
        assert_eq!(bb.msb(), Some(Square(6, 3)));
        assert_eq!(Bitboard::EMPTY.lsb(), None);
        assert_eq!(Bitboard::EMPTY.msb(), None);
    }

    #[test]
    fn test_iter_and_more_than_one() {
        let bb = Bitboard::from_square(Square(0, 0)) | Bitboard::from_square(Square(9, 11));
        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares, vec![Square(0, 0), Square(9, 11)]);
        assert!(bb.more_than_one());
        assert!(!Bitboard::from_square(Square(4, 4)).more_than_one());
        assert!(!Bitboard::EMPTY.more_than_one());
    }

    #[test]
    fn test_not_stays_in_layout() {
        assert_eq!(!Bitboard::EMPTY, Bitboard::ALL);
        assert_eq!(!Bitboard::ALL, Bitboard::EMPTY);
    }
}
