//! Property-based tests using proptest.

use crate::board::{
    classify_pawn, evaluate_shelter, Board, BoardBuilder, Color, PawnBoard, PawnClass, Piece,
    Square,
};
use crate::pawn_hash::PawnTable;
use proptest::prelude::*;

/// Strategy for a scattered set of pawns on ranks 2-7 of an 8x8 board
fn pawns_strategy() -> impl Strategy<Value = Vec<(usize, usize, bool)>> {
    prop::collection::vec((1..7usize, 0..8usize, any::<bool>()), 0..20)
}

fn build(pawns: &[(usize, usize, bool)]) -> Board {
    let mut builder = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::King);
    for &(rank, file, white) in pawns {
        let color = if white { Color::White } else { Color::Black };
        builder = builder.piece(Square(rank, file), color, Piece::Pawn);
    }
    builder.build()
}

proptest! {
    /// Property: probing twice gives identical results
    #[test]
    fn prop_probe_idempotent(pawns in pawns_strategy()) {
        let board = build(&pawns);
        let mut table = PawnTable::new(64);

        let first = table.probe(&board).clone();
        let second = table.probe(&board).clone();

        prop_assert_eq!(table.stats().hits, 1);
        for color in Color::BOTH {
            prop_assert_eq!(first.pawn_score(color), second.pawn_score(color));
            prop_assert_eq!(first.passed_pawns(color), second.passed_pawns(color));
            prop_assert_eq!(first.pawn_attacks(color), second.pawn_attacks(color));
            prop_assert_eq!(first.pawn_attacks_span(color), second.pawn_attacks_span(color));
        }
    }

    /// Property: a colliding table computes the same scores as a roomy one
    #[test]
    fn prop_collisions_never_leak(a in pawns_strategy(), b in pawns_strategy()) {
        let first = build(&a);
        let second = build(&b);
        let mut tiny = PawnTable::new(1);
        let mut roomy = PawnTable::new(1024);

        tiny.probe(&first);
        let expected = roomy.probe(&second).net_score();
        let entry = tiny.probe(&second);
        prop_assert_eq!(entry.key(), second.pawn_key());
        prop_assert_eq!(entry.net_score(), expected);
    }

    /// Property: mirroring the board swaps the two sides' results
    #[test]
    fn prop_color_mirror_symmetry(pawns in pawns_strategy()) {
        let board = build(&pawns);
        let mirrored = board.mirrored();
        let mut table = PawnTable::new(64);

        let original = table.probe(&board).clone();
        let flipped = table.probe(&mirrored).clone();

        prop_assert_eq!(original.pawn_score(Color::White), flipped.pawn_score(Color::Black));
        prop_assert_eq!(original.pawn_score(Color::Black), flipped.pawn_score(Color::White));
        prop_assert_eq!(original.passed_count(), flipped.passed_count());

        let white_king = Square(0, 4);
        let black_king = Square(7, 4);
        prop_assert_eq!(
            evaluate_shelter(&board, Color::White, white_king),
            evaluate_shelter(&mirrored, Color::Black, black_king)
        );
    }

    /// Property: removing an enemy pawn never un-passes one of ours
    #[test]
    fn prop_passed_monotonic(pawns in pawns_strategy(), pick in any::<prop::sample::Index>()) {
        let board = build(&pawns);
        let black_pawns: Vec<Square> = board.pieces(Color::Black, Piece::Pawn).iter().collect();
        prop_assume!(!black_pawns.is_empty());

        let mut fewer = board.clone();
        fewer.remove_piece(*pick.get(&black_pawns));

        let mut table = PawnTable::new(64);
        let before = table.probe(&board).passed_pawns(Color::White);
        let after = table.probe(&fewer).passed_pawns(Color::White);
        prop_assert_eq!(before & after, before);
    }

    /// Property: each pawn falls in exactly one scoring class
    #[test]
    fn prop_classification_exclusive(pawns in pawns_strategy()) {
        let board = build(&pawns);
        for color in Color::BOTH {
            for sq in board.pieces(color, Piece::Pawn) {
                let flags = classify_pawn(&board, color, sq);
                let connected = (flags.support | flags.phalanx).any();
                let isolated = !connected && flags.neighbours.is_empty();
                let backward = !connected && !isolated && flags.backward;
                let matching = [connected, isolated, backward].iter().filter(|&&b| b).count();
                prop_assert!(matching <= 1);

                let expected = if connected {
                    PawnClass::Connected
                } else if isolated {
                    PawnClass::Isolated
                } else if backward {
                    PawnClass::Backward
                } else {
                    PawnClass::Plain
                };
                prop_assert_eq!(flags.class(), expected);
            }
        }
    }

    /// Property: incremental pawn key always matches a fresh computation
    #[test]
    fn prop_pawn_key_consistency(pawns in pawns_strategy(), removals in 0..5usize) {
        let mut board = build(&pawns);
        prop_assert_eq!(board.pawn_key(), board.calculate_pawn_key());

        let squares: Vec<Square> = board.pieces_both(Piece::Pawn).iter().take(removals).collect();
        for sq in squares {
            board.remove_piece(sq);
            prop_assert_eq!(board.pawn_key(), board.calculate_pawn_key());
        }
    }

    /// Property: king safety inputs are current right after computing them
    #[test]
    fn prop_king_safety_not_stale_after_compute(pawns in pawns_strategy()) {
        let board = build(&pawns);
        let mut table = PawnTable::new(64);
        let entry = table.probe(&board);
        for color in Color::BOTH {
            prop_assert!(entry.king_safety_is_stale(&board, color));
            entry.king_safety(&board, color);
            prop_assert!(!entry.king_safety_is_stale(&board, color));
        }
    }

    /// Property: FEN round-trip preserves the position
    #[test]
    fn prop_fen_roundtrip(pawns in pawns_strategy()) {
        let board = build(&pawns);
        let parsed = Board::try_from_fen(&board.to_fen()).expect("own FEN parses");
        prop_assert_eq!(parsed, board);
    }
}
