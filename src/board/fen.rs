use std::str::FromStr;

use super::error::FenError;
use super::types::{CastlingRights, Color, Piece, Square};
use super::variant::Variant;
use super::Board;

impl Board {
    /// Parse a standard chess position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Self::try_from_fen_with(fen, Variant::chess())
    }

    /// Parse a position for any board size.
    ///
    /// Empty-square runs may have more than one digit (`10` on a 10-file
    /// board), and the placement must list exactly `variant.ranks()` ranks.
    /// A bracketed pocket after the placement (`.../RNBQKBNR[Pp] w ...`) is
    /// accepted and ignored, as is the `~` promoted-piece marker.
    pub fn try_from_fen_with(fen: &str, variant: Variant) -> Result<Self, FenError> {
        let mut board = Board::empty(variant);
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let placement = parts[0].split('[').next().unwrap_or_default();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != variant.ranks() {
            return Err(FenError::WrongRankCount {
                expected: variant.ranks(),
                found: ranks.len(),
            });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = variant.max_rank() - rank_idx;
            let mut file = 0;
            let mut run = 0;
            for c in rank_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    run = run * 10 + d as usize;
                    continue;
                }
                file += run;
                run = 0;
                if c == '~' {
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= variant.files() {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(rank, file), color, piece);
                file += 1;
            }
            file += run;
            if file > variant.files() {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        match parts[1] {
            "w" => board.white_to_move = true,
            "b" => board.white_to_move = false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Parse castling rights
        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling_rights = rights;

        // En passant only needs to be well formed; pawn scoring never reads it
        if parts[3] != "-" {
            let on_board = parts[3]
                .parse::<Square>()
                .is_ok_and(|sq| variant.board_bb().contains(sq));
            if !on_board {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        }

        Ok(board)
    }

    /// Parse a standard chess position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation. The en passant field is
    /// always `-` and the move counters are `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..self.variant.ranks()).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..self.variant.files() {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        format!("{} {} {} - 0 1", rows.join("/"), active, castling)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
