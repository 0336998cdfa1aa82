//! Error types for board construction and variant configuration.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Placement has a different number of ranks than the board
    WrongRankCount { expected: usize, found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::WrongRankCount { expected, found } => {
                write!(f, "FEN placement has {found} ranks, board has {expected}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-9)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-11)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-9)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-11)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for variant configuration failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// Board dimensions outside the supported 3x3..12x10 range
    UnsupportedDimensions { files: usize, ranks: usize },
    /// A castling destination file does not exist on the board
    CastlingFileOutOfBounds { file: usize, files: usize },
    /// No preset with this name
    UnknownVariant { name: String },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::UnsupportedDimensions { files, ranks } => {
                write!(
                    f,
                    "Unsupported board size {files}x{ranks} (files 3-12, ranks 3-10)"
                )
            }
            VariantError::CastlingFileOutOfBounds { file, files } => {
                write!(
                    f,
                    "Castling file {file} is off a board with {files} files"
                )
            }
            VariantError::UnknownVariant { name } => {
                write!(f, "Unknown variant '{name}'")
            }
        }
    }
}

impl std::error::Error for VariantError {}
