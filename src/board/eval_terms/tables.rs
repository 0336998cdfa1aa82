//! Evaluation constants and tables.
//!
//! Contains the tuned pawn structure and king shelter parameters. Rank
//! indexed tables are sized to the largest supported board and padded with
//! zeros past the ranks a standard board uses.

use crate::board::types::{Score, FILE_NB, RANK_NB};

// ============================================================================
// PAWN STRUCTURE CONSTANTS
// ============================================================================

/// Pawn that cannot be safely advanced and has no neighbour behind it
pub const BACKWARD: Score = Score::new(9, 24);
/// Pawn with an own pawn directly behind it and no support
pub const DOUBLED: Score = Score::new(11, 56);
/// Pawn with no own pawns on adjacent files
pub const ISOLATED: Score = Score::new(5, 15);
/// Pawn attacked twice by enemy pawns and not defended by one of ours
pub const WEAK_LEVER: Score = Score::new(0, 56);
/// Extra penalty for isolated or backward pawns on a half-open file
pub const WEAK_UNOPPOSED: Score = Score::new(13, 27);

/// Connected pawn bonus by relative rank
pub const CONNECTED: [i32; RANK_NB] = [0, 7, 8, 12, 29, 48, 86, 0, 0, 0];

// ============================================================================
// KING SHELTER CONSTANTS
// ============================================================================

/// Baseline shelter before any file is scanned
pub const SHELTER_BASE: Score = Score::new(5, 5);

/// Storm penalty when the enemy pawn is blocked by ours on our third rank
pub const BLOCKED_STORM: Score = Score::new(82, 82);

/// Midgame bonus for our shelter pawn, by distance of the file from the
/// board edge (capped at 3) and relative rank of the pawn. Column 0 means
/// there is no pawn on that file.
pub const SHELTER_STRENGTH: [[i32; RANK_NB]; FILE_NB / 2] = [
    [-6, 81, 93, 58, 39, 18, 25, 0, 0, 0],
    [-43, 61, 35, -49, -29, -11, -63, 0, 0, 0],
    [-10, 75, 23, -2, 32, 3, -45, 0, 0, 0],
    [-39, -13, -29, -52, -48, -67, -166, 0, 0, 0],
    [0; RANK_NB],
    [0; RANK_NB],
];

/// Midgame penalty for an enemy pawn storming the file with no own pawn in
/// front of it, same indexing as `SHELTER_STRENGTH`.
pub const UNBLOCKED_STORM: [[i32; RANK_NB]; FILE_NB / 2] = [
    [89, -285, -185, 93, 57, 45, 51, 0, 0, 0],
    [44, -18, 123, 46, 39, -7, 23, 0, 0, 0],
    [4, 52, 162, 37, 7, -14, -2, 0, 0, 0],
    [-10, -14, 90, 15, 2, -7, -16, 0, 0, 0],
    [0; RANK_NB],
    [0; RANK_NB],
];

/// Endgame penalty per step between the king and its nearest pawn
pub const KING_PAWN_DISTANCE: i32 = 16;

/// Distance used when the side has no pawns at all
pub const NO_PAWN_DISTANCE: usize = 8;

// ============================================================================
// CONNECTED PAWN BONUS TUNING
// ============================================================================

/// Per supporting pawn, on top of the rank bonus
pub const SUPPORT_BONUS: i32 = 17;
/// Per supporting or phalanx pawn, for pawn-heavy variants
pub const CROWD_BONUS: i32 = 50;
