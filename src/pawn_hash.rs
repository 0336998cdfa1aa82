//! Pawn hash table for caching pawn structure evaluation.
//!
//! Pawn structure only depends on pawn positions, so it can be cached
//! using a pawn-only Zobrist hash. This provides significant speedup
//! since pawn structure evaluation is called frequently but pawns
//! rarely move.
//!
//! Each search worker owns its own table. Slots are direct mapped and
//! overwritten on a miss; a stored key must match in full for a hit.
//!
//! # Example
//! ```
//! use pawn_eval::board::{Board, Color};
//! use pawn_eval::PawnTable;
//!
//! let mut table = PawnTable::new(1024);
//! let board = Board::new();
//! let entry = table.probe(&board);
//! assert_eq!(entry.net_score().mg(), 0);
//! let safety = entry.king_safety(&board, Color::White);
//! assert!(safety.eg() < 0);
//! ```

use crate::board::{
    evaluate_pawns, Bitboard, CastlingRights, Color, PawnBoard, Piece, Score, Square,
};

/// Default number of entries per table
pub const DEFAULT_PAWN_ENTRIES: usize = 16384;

/// Cached evaluation of one pawn configuration.
#[derive(Clone, Debug, Default)]
pub struct Entry {
    pub(crate) key: u64,
    pub(crate) populated: bool,
    pub(crate) scores: [Score; 2],
    pub(crate) passed_pawns: [Bitboard; 2],
    pub(crate) pawn_attacks_span: [Bitboard; 2],
    pub(crate) pawn_attacks: [Bitboard; 2],
    pub(crate) king_squares: [Option<Square>; 2],
    pub(crate) castling_rights: [CastlingRights; 2],
}

impl Entry {
    /// Pawn key this entry was computed for.
    #[inline]
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Pawn structure score of one side.
    #[inline]
    #[must_use]
    pub fn pawn_score(&self, color: Color) -> Score {
        self.scores[color.index()]
    }

    /// White's score minus Black's.
    #[inline]
    #[must_use]
    pub fn net_score(&self) -> Score {
        self.scores[Color::White.index()] - self.scores[Color::Black.index()]
    }

    #[inline]
    #[must_use]
    pub fn passed_pawns(&self, color: Color) -> Bitboard {
        self.passed_pawns[color.index()]
    }

    /// Number of passed pawns of both sides.
    #[inline]
    #[must_use]
    pub fn passed_count(&self) -> u32 {
        (self.passed_pawns[0] | self.passed_pawns[1]).popcount()
    }

    /// Squares attacked by the side's pawns.
    #[inline]
    #[must_use]
    pub fn pawn_attacks(&self, color: Color) -> Bitboard {
        self.pawn_attacks[color.index()]
    }

    /// Squares the side's pawns could attack as they advance.
    #[inline]
    #[must_use]
    pub fn pawn_attacks_span(&self, color: Color) -> Bitboard {
        self.pawn_attacks_span[color.index()]
    }

    /// King square of the last king safety computation, `None` if there was
    /// none for this pawn structure yet.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    /// The side's castling rights at the last king safety computation.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    fn refresh<B: PawnBoard + ?Sized>(&mut self, pos: &B) {
        self.key = pos.pawn_key();
        self.populated = true;
        for color in Color::BOTH {
            let score = evaluate_pawns(pos, color, self);
            self.scores[color.index()] = score;
        }
    }
}

/// Probe counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeStats {
    pub hits: u64,
    pub misses: u64,
}

impl ProbeStats {
    /// Fraction of probes answered from the table.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Direct-mapped pawn structure cache.
#[derive(Debug)]
pub struct PawnTable {
    entries: Box<[Entry]>,
    mask: usize,
    stats: ProbeStats,
}

impl PawnTable {
    /// Create a table with at least `entries` slots, rounded up to a power
    /// of two.
    #[must_use]
    pub fn new(entries: usize) -> Self {
        let capacity = entries.max(1).next_power_of_two();

        #[cfg(feature = "logging")]
        log::debug!(
            "pawn table: {capacity} entries, {} KB",
            capacity * std::mem::size_of::<Entry>() / 1024
        );

        PawnTable {
            entries: vec![Entry::default(); capacity].into_boxed_slice(),
            mask: capacity - 1,
            stats: ProbeStats::default(),
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Look up the entry for the position's pawn structure, computing it if
    /// the slot holds something else.
    ///
    /// Soft pawns are not part of the pawn key, so any position with soft
    /// pawns on the board is recomputed on every probe.
    pub fn probe<B: PawnBoard + ?Sized>(&mut self, pos: &B) -> &mut Entry {
        let key = pos.pawn_key();
        let idx = self.index(key);
        let soft_pawns = pos.pieces_both(Piece::SoftPawn).any();
        let entry = &mut self.entries[idx];

        if entry.populated && entry.key == key && !soft_pawns {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            entry.refresh(pos);
        }
        entry
    }

    /// Number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Forget every entry and reset the counters.
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!(
            "pawn table cleared after {} hits, {} misses",
            self.stats.hits,
            self.stats.misses
        );

        for entry in self.entries.iter_mut() {
            entry.populated = false;
        }
        self.stats = ProbeStats::default();
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> ProbeStats {
        self.stats
    }
}

impl Default for PawnTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAWN_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_capacity_rounds_up() {
        assert_eq!(PawnTable::new(1000).capacity(), 1024);
        assert_eq!(PawnTable::new(0).capacity(), 1);
        assert_eq!(PawnTable::default().capacity(), DEFAULT_PAWN_ENTRIES);
    }

    #[test]
    fn test_probe_hits_second_time() {
        let mut table = PawnTable::new(64);
        let board = Board::new();

        let first = table.probe(&board).pawn_score(Color::White);
        let second = table.probe(&board).pawn_score(Color::White);

        assert_eq!(first, second);
        assert_eq!(table.stats(), ProbeStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_fresh_slot_never_hits() {
        // A zeroed slot must not match a key that happens to be zero
        let mut table = PawnTable::new(1);
        assert!(!table.entries[0].populated);
        let board = Board::new();
        table.probe(&board);
        assert_eq!(table.stats().misses, 1);
    }

    #[test]
    fn test_collision_recomputes() {
        let mut table = PawnTable::new(1);
        let start = Board::new();
        let lone = Board::from_fen("4k3/8/8/8/3P4/8/8/4K3 w - - 0 1");

        table.probe(&start);
        let entry = table.probe(&lone);
        assert_eq!(entry.key(), lone.pawn_key());
        assert_eq!(entry.pawn_score(Color::White), Score::new(-18, -42));
        assert_eq!(table.stats().misses, 2);
    }

    #[test]
    fn test_clear() {
        let mut table = PawnTable::new(64);
        let board = Board::new();

        table.probe(&board);
        table.clear();
        assert_eq!(table.stats(), ProbeStats::default());

        table.probe(&board);
        assert_eq!(table.stats().misses, 1);
    }

    #[test]
    fn test_soft_pawns_force_recompute() {
        let mut table = PawnTable::new(64);
        let board = Board::from_fen("4k3/8/8/8/8/2S5/3P4/4K3 w - - 0 1");

        table.probe(&board);
        table.probe(&board);
        assert_eq!(table.stats(), ProbeStats { hits: 0, misses: 2 });
    }

    #[test]
    fn test_hit_rate() {
        let stats = ProbeStats { hits: 3, misses: 1 };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(ProbeStats::default().hit_rate(), 0.0);
    }
}
