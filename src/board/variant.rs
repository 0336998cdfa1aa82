//! Variant configuration.
//!
//! Board dimensions and the handful of rule flags that change pawn and
//! shelter scoring. Everything else about a variant (move rules, piece sets)
//! belongs to the move generator and is not modelled here.
//!
//! # Example
//! ```
//! use pawn_eval::board::Variant;
//!
//! let crazyhouse: Variant = "crazyhouse".parse().unwrap();
//! assert!(crazyhouse.captures_to_hand());
//!
//! let custom = Variant::new(10, 8).unwrap().with_must_capture(true);
//! assert_eq!(custom.max_file(), 9);
//! ```

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::VariantError;
use super::types::{Bitboard, FILE_NB, RANK_NB};

const MIN_FILES: usize = 3;
const MIN_RANKS: usize = 3;

/// Board geometry and scoring-relevant rule flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variant {
    files: usize,
    ranks: usize,
    /// Captured pieces go to a reserve and can be dropped back
    captures_to_hand: bool,
    /// Captures are compulsory
    must_capture: bool,
    castling_kingside_file: usize,
    castling_queenside_file: usize,
}

impl Variant {
    /// Standard 8x8 chess.
    #[must_use]
    pub const fn chess() -> Self {
        Variant {
            files: 8,
            ranks: 8,
            captures_to_hand: false,
            must_capture: false,
            castling_kingside_file: 6,
            castling_queenside_file: 2,
        }
    }

    /// A board of the given size with no special rules. The king castles to
    /// the second-to-last file on the kingside and file c on the queenside.
    pub fn new(files: usize, ranks: usize) -> Result<Self, VariantError> {
        if !(MIN_FILES..=FILE_NB).contains(&files) || !(MIN_RANKS..=RANK_NB).contains(&ranks) {
            return Err(VariantError::UnsupportedDimensions { files, ranks });
        }
        Ok(Variant {
            files,
            ranks,
            captures_to_hand: false,
            must_capture: false,
            castling_kingside_file: files - 2,
            castling_queenside_file: 2,
        })
    }

    #[must_use]
    pub const fn with_captures_to_hand(mut self, enabled: bool) -> Self {
        self.captures_to_hand = enabled;
        self
    }

    #[must_use]
    pub const fn with_must_capture(mut self, enabled: bool) -> Self {
        self.must_capture = enabled;
        self
    }

    /// Override the files the king lands on when castling.
    pub fn with_castling_files(mut self, kingside: usize, queenside: usize) -> Result<Self, VariantError> {
        for file in [kingside, queenside] {
            if file >= self.files {
                return Err(VariantError::CastlingFileOutOfBounds {
                    file,
                    files: self.files,
                });
            }
        }
        self.castling_kingside_file = kingside;
        self.castling_queenside_file = queenside;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub const fn files(&self) -> usize {
        self.files
    }

    #[inline]
    #[must_use]
    pub const fn ranks(&self) -> usize {
        self.ranks
    }

    /// Index of the last file
    #[inline]
    #[must_use]
    pub const fn max_file(&self) -> usize {
        self.files - 1
    }

    /// Index of the last rank
    #[inline]
    #[must_use]
    pub const fn max_rank(&self) -> usize {
        self.ranks - 1
    }

    #[inline]
    #[must_use]
    pub const fn captures_to_hand(&self) -> bool {
        self.captures_to_hand
    }

    #[inline]
    #[must_use]
    pub const fn must_capture(&self) -> bool {
        self.must_capture
    }

    #[inline]
    #[must_use]
    pub const fn castling_kingside_file(&self) -> usize {
        self.castling_kingside_file
    }

    #[inline]
    #[must_use]
    pub const fn castling_queenside_file(&self) -> usize {
        self.castling_queenside_file
    }

    /// Squares that exist on this board.
    #[must_use]
    pub const fn board_bb(&self) -> Bitboard {
        let row = (1u128 << self.files) - 1;
        let mut bits = 0u128;
        let mut r = 0;
        while r < self.ranks {
            bits |= row << (r * FILE_NB);
            r += 1;
        }
        Bitboard(bits)
    }

    /// Number of squares on this board.
    #[inline]
    #[must_use]
    pub const fn square_count(&self) -> u32 {
        (self.files * self.ranks) as u32
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::chess()
    }
}

impl FromStr for Variant {
    type Err = VariantError;

    /// Named presets: `chess`, `crazyhouse`, `antichess`, `capablanca`,
    /// `grand`, `shogi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chess" => Ok(Variant::chess()),
            "crazyhouse" => Ok(Variant::chess().with_captures_to_hand(true)),
            "antichess" => Ok(Variant::chess().with_must_capture(true)),
            "capablanca" => Variant::new(10, 8),
            "grand" => Variant::new(10, 10),
            "shogi" => Ok(Variant::new(9, 9)?.with_captures_to_hand(true)),
            _ => Err(VariantError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Square;

    #[test]
    fn test_chess_geometry() {
        let chess = Variant::chess();
        assert_eq!(chess.max_file(), 7);
        assert_eq!(chess.max_rank(), 7);
        assert_eq!(chess.board_bb().popcount(), 64);
        assert_eq!(chess.square_count(), 64);
        assert!(chess.board_bb().contains(Square(7, 7)));
        assert!(!chess.board_bb().contains(Square(7, 8)));
        assert!(!chess.board_bb().contains(Square(8, 0)));
        assert_eq!(chess, Variant::new(8, 8).unwrap());
    }

    #[test]
    fn test_largest_board_fills_layout() {
        let big = Variant::new(FILE_NB, RANK_NB).unwrap();
        assert_eq!(big.board_bb(), Bitboard::ALL);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Variant::new(13, 8),
            Err(VariantError::UnsupportedDimensions { files: 13, ranks: 8 })
        ));
        assert!(Variant::new(8, 11).is_err());
        assert!(Variant::new(2, 8).is_err());
        assert!(Variant::new(8, 2).is_err());
    }

    #[test]
    fn test_castling_files() {
        let capablanca: Variant = "capablanca".parse().unwrap();
        assert_eq!(capablanca.castling_kingside_file(), 8);
        assert_eq!(capablanca.castling_queenside_file(), 2);

        let err = Variant::chess().with_castling_files(8, 2);
        assert!(matches!(
            err,
            Err(VariantError::CastlingFileOutOfBounds { file: 8, files: 8 })
        ));
    }

    #[test]
    fn test_presets() {
        assert!("crazyhouse".parse::<Variant>().unwrap().captures_to_hand());
        assert!("Antichess".parse::<Variant>().unwrap().must_capture());
        let grand: Variant = "grand".parse().unwrap();
        assert_eq!((grand.files(), grand.ranks()), (10, 10));
        let shogi: Variant = "shogi".parse().unwrap();
        assert_eq!(shogi.square_count(), 81);
        assert!(matches!(
            "bughouse".parse::<Variant>(),
            Err(VariantError::UnknownVariant { .. })
        ));
    }
}
