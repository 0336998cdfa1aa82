//! Square types and utilities.
//!
//! Squares live on a fixed 12x10 grid so that every supported board size
//! shares one bit layout; smaller boards simply leave the outer files and
//! ranks unused.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width of the bit layout (maximum number of files).
pub const FILE_NB: usize = 12;
/// Height of the bit layout (maximum number of ranks).
pub const RANK_NB: usize = 10;
/// Number of squares in the bit layout.
pub const SQUARE_NB: usize = FILE_NB * RANK_NB;

/// A square on the board, represented as (rank, file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Get the rank (0-based, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-based, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Flip the square vertically on a board whose last rank is `max_rank`
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self, max_rank: usize) -> Self {
        Square(max_rank - self.0, self.1)
    }

    /// Bit index in the 12x10 layout
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * FILE_NB + self.1
    }

    /// Create a square from a layout index
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / FILE_NB, idx % FILE_NB)
    }

    /// Chebyshev distance (number of king steps) between two squares
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Square) -> usize {
        let dr = self.0.abs_diff(other.0);
        let df = self.1.abs_diff(other.1);
        if dr > df {
            dr
        } else {
            df
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= RANK_NB {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= FILE_NB {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses `a1` through `l10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let file = match chars.next() {
            Some(c @ 'a'..='l') => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || digits.starts_with('0') {
            return Err(invalid());
        }
        let rank: usize = digits.parse().map_err(|_| invalid())?;
        if rank == 0 || rank > RANK_NB {
            return Err(invalid());
        }

        Ok(Square(rank - 1, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq, Square(3, 4));
        assert_eq!(sq.to_string(), "e4");

        let far: Square = "l10".parse().unwrap();
        assert_eq!(far, Square(9, 11));
        assert_eq!(far.to_string(), "l10");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "e", "m1", "a0", "a11", "a01", "4e"] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..SQUARE_NB {
            assert_eq!(Square::from_index(idx).as_index(), idx);
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Square(0, 4).distance(Square(1, 5)), 1);
        assert_eq!(Square(0, 0).distance(Square(7, 7)), 7);
        assert_eq!(Square(2, 2).distance(Square(2, 2)), 0);
        assert_eq!(Square(0, 0).distance(Square(3, 1)), 3);
    }

    #[test]
    fn test_flip_vertical() {
        assert_eq!(Square(1, 3).flip_vertical(7), Square(6, 3));
        assert_eq!(Square(0, 0).flip_vertical(9), Square(9, 0));
    }

    #[test]
    fn test_try_from_bounds() {
        assert!(Square::try_from((9, 11)).is_ok());
        assert!(matches!(
            Square::try_from((10, 0)),
            Err(SquareError::RankOutOfBounds { rank: 10 })
        ));
        assert!(matches!(
            Square::try_from((0, 12)),
            Err(SquareError::FileOutOfBounds { file: 12 })
        ));
    }
}
