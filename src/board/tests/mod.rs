//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation under both rule sets
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Black/white asymmetries and odd positions
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::MoveList;

/// Notation of each move, in generation order.
pub(super) fn notations(moves: &MoveList) -> Vec<String> {
    moves.iter().map(|m| m.chess_notation()).collect()
}
