//! Pawn structure evaluation.
//!
//! Classifies every pawn of one side (connected, isolated, backward, doubled,
//! passed) and turns the classes into a two-phase score. The per-side pass
//! also fills the passed pawn and pawn attack bitboards of the cache entry.

use crate::board::masks::{
    forward_file, forward_ranks, forward_square, passed_pawn_span, pawn_attack_span,
    pawn_attacks_bb, pawn_double_attacks_bb, pawn_push, relative_rank, ADJACENT_FILES,
    PAWN_ATTACKS, RANK_1, RANK_2, RANK_4, RANK_5,
};
use crate::board::query::PawnBoard;
use crate::board::types::{Bitboard, Color, Piece, Score, Square};
use crate::pawn_hash::Entry;

use super::tables::{
    BACKWARD, CONNECTED, CROWD_BONUS, DOUBLED, ISOLATED, SUPPORT_BONUS, WEAK_LEVER,
    WEAK_UNOPPOSED,
};

/// The scoring class of a single pawn. Exactly one applies to every pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PawnClass {
    /// Supported from behind or standing next to an own pawn
    Connected,
    /// No own pawns on the adjacent files
    Isolated,
    /// Behind its neighbours and unable to advance safely
    Backward,
    /// None of the above
    Plain,
}

/// Everything the scorer learns about one pawn.
///
/// The bitboards hold enemy pawns for `stoppers`, `lever` and `lever_push`,
/// and own pawns for the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PawnFlags {
    /// Rank relative to the pawn's owner
    pub rank: usize,
    /// An enemy pawn is somewhere ahead on the same file
    pub opposed: bool,
    /// Enemy pawns that can block or capture this pawn on its way
    pub stoppers: Bitboard,
    /// Enemy pawns this pawn attacks
    pub lever: Bitboard,
    /// Enemy pawns this pawn would attack after one push
    pub lever_push: Bitboard,
    /// Own pawn directly behind
    pub doubled: Bitboard,
    /// Own pawns on adjacent files
    pub neighbours: Bitboard,
    /// Own pawns beside this one on the same rank
    pub phalanx: Bitboard,
    /// Own pawns defending this one
    pub support: Bitboard,
    /// Behind its neighbours with a stopper on or beside the push square
    pub backward: bool,
    /// Passed, and not already on the last rank
    pub passed: bool,
}

impl PawnFlags {
    /// Scoring class; connected wins over isolated, which wins over backward.
    #[must_use]
    pub fn class(&self) -> PawnClass {
        if (self.support | self.phalanx).any() {
            PawnClass::Connected
        } else if self.neighbours.is_empty() {
            PawnClass::Isolated
        } else if self.backward {
            PawnClass::Backward
        } else {
            PawnClass::Plain
        }
    }

    /// Doubled pawns are only penalized when nothing supports them.
    #[inline]
    #[must_use]
    pub fn is_weak_doubled(&self) -> bool {
        self.doubled.any() && self.support.is_empty()
    }
}

/// Per-side data shared by every pawn of the pass.
struct SideContext<'a, B: PawnBoard + ?Sized> {
    pos: &'a B,
    us: Color,
    our_pawns: Bitboard,
    their_pawns: Bitboard,
    double_attack_them: Bitboard,
}

impl<'a, B: PawnBoard + ?Sized> SideContext<'a, B> {
    fn new(pos: &'a B, us: Color) -> Self {
        let them = us.opponent();
        let their_pawns = pos.pieces(them, Piece::Pawn);
        SideContext {
            pos,
            us,
            our_pawns: pos.pieces(us, Piece::Pawn),
            their_pawns,
            double_attack_them: pawn_double_attacks_bb(them, their_pawns),
        }
    }

    fn classify(&self, s: Square) -> PawnFlags {
        let us = self.us;
        let them = us.opponent();
        let max_rank = self.pos.variant().max_rank();
        let r = relative_rank(s.rank(), us, max_rank);
        let up = forward_square(us, s, max_rank);
        let behind = if r > RANK_1 {
            forward_square(them, s, max_rank)
        } else {
            None
        };

        let opposed = (self.their_pawns & forward_file(us, s)).any();
        let stoppers = self.their_pawns & passed_pawn_span(us, s);
        let lever = self.their_pawns & PAWN_ATTACKS[us.index()][s.as_index()];
        let lever_push = up.map_or(Bitboard::EMPTY, |u| {
            self.their_pawns & PAWN_ATTACKS[us.index()][u.as_index()]
        });
        let doubled = behind.map_or(Bitboard::EMPTY, |b| {
            self.our_pawns & Bitboard::from_square(b)
        });
        let neighbours = self.our_pawns & ADJACENT_FILES[s.file()];
        let phalanx = neighbours & Bitboard::rank_mask(s.rank());
        let support = behind.map_or(Bitboard::EMPTY, |b| {
            neighbours & Bitboard::rank_mask(b.rank())
        });

        // Behind all own pawns on the adjacent files and blocked or levered
        // on the push square
        let backward = (neighbours & forward_ranks(them, s.rank())).is_empty()
            && up.is_some_and(|u| (stoppers & (lever_push | Bitboard::from_square(u))).any());

        let passed = (stoppers ^ lever).is_empty()
            || ((stoppers ^ lever_push).is_empty() && phalanx.popcount() >= lever_push.popcount())
            || up.is_some_and(|u| {
                stoppers == Bitboard::from_square(u)
                    && r >= RANK_5
                    && (pawn_push(us, support) & !(self.their_pawns | self.double_attack_them))
                        .any()
            });

        PawnFlags {
            rank: r,
            opposed,
            stoppers,
            lever,
            lever_push,
            doubled,
            neighbours,
            phalanx,
            support,
            backward,
            passed: passed && up.is_some(),
        }
    }

    fn score(&self, flags: &PawnFlags) -> Score {
        let variant = self.pos.variant();
        let opposed_div = if flags.opposed { 2 } else { 1 };
        let unopposed = i32::from(!flags.opposed);
        let mut score = Score::ZERO;

        match flags.class() {
            PawnClass::Connected => {
                let r = flags.rank;
                let phalanx_mul = if flags.phalanx.any() { 3 } else { 2 };
                let hand_mul = if r == RANK_2 && variant.captures_to_hand() { 3 } else { 1 };
                let mut v = CONNECTED[r] * phalanx_mul * hand_mul / opposed_div
                    + SUPPORT_BONUS * flags.support.popcount() as i32;
                if r >= RANK_4 && self.pos.count(self.us, Piece::Pawn) > variant.square_count() / 4
                {
                    let crowd = (flags.support | flags.phalanx).popcount() as i32 * CROWD_BONUS;
                    v = v.max(crowd) / opposed_div;
                }
                score += Score::new(v, v * (r as i32 - 2) / 4);
            }
            PawnClass::Isolated => {
                let must_capture = i32::from(variant.must_capture());
                score -= ISOLATED * (1 + 2 * must_capture) + WEAK_UNOPPOSED * unopposed;
            }
            PawnClass::Backward => {
                score -= BACKWARD + WEAK_UNOPPOSED * unopposed;
            }
            PawnClass::Plain => {}
        }

        if flags.is_weak_doubled() {
            score -= DOUBLED;
        }
        score
    }
}

/// Classify the pawn of `color` standing on `square`.
///
/// The square must hold a primary pawn of that color.
#[must_use]
pub fn classify_pawn<B: PawnBoard + ?Sized>(pos: &B, color: Color, square: Square) -> PawnFlags {
    debug_assert!(
        pos.pieces(color, Piece::Pawn).contains(square),
        "no {color} pawn on {square}"
    );
    SideContext::new(pos, color).classify(square)
}

/// Score the pawn structure of one side and record its passed pawns and pawn
/// attacks in `entry`. The stored king square for the side is reset.
pub fn evaluate_pawns<B: PawnBoard + ?Sized>(pos: &B, color: Color, entry: &mut Entry) -> Score {
    let us = color.index();
    let board_bb = pos.variant().board_bb();
    let ctx = SideContext::new(pos, color);

    let pawn_attacks = pawn_attacks_bb(color, ctx.our_pawns) & board_bb;
    let mut passed = Bitboard::EMPTY;
    let mut attack_span = Bitboard::EMPTY;
    let mut score = Score::ZERO;

    for s in ctx.our_pawns {
        attack_span |= pawn_attack_span(color, s);
        let flags = ctx.classify(s);
        if flags.passed {
            passed |= Bitboard::from_square(s);
        }
        score += ctx.score(&flags);
    }

    // Pawns attacked twice with no pawn defender, unless passed
    let weak_levers = ctx.our_pawns & ctx.double_attack_them & !(pawn_attacks | passed);
    score -= WEAK_LEVER * weak_levers.popcount() as i32;

    // Pawns only: structure is everything
    if pos.piece_count(color) == pos.count(color, Piece::Pawn) {
        score = score * 2;
    }

    let soft_pawns = pos.pieces(color, Piece::SoftPawn);
    for s in soft_pawns {
        if (soft_pawns & ADJACENT_FILES[s.file()]).is_empty() {
            score -= ISOLATED / 2;
        }
    }

    entry.passed_pawns[us] = passed;
    entry.pawn_attacks_span[us] = attack_span & board_bb;
    entry.pawn_attacks[us] = pawn_attacks;
    entry.king_squares[us] = None;
    score
}
