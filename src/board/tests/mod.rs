//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `eval.rs` - Pawn structure and king safety scores on known positions
//! - `edge_cases.rs` - Variant boards, soft pawns and missing kings
//! - `proptest.rs` - Property-based tests

mod proptest;
