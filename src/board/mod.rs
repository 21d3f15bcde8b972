//! Game state and move generation.
//!
//! The board is a plain 8×8 grid of two-character piece tags (`wp`, `bK`, ...)
//! with row 0 as the black back rank. Moves are generated pseudo-legally: no
//! check, castling, en passant, or promotion handling.
//!
//! # Example
//! ```
//! use chess_state::board::{GameState, Square};
//!
//! let mut game = GameState::new();
//! let moves = game.valid_moves();
//! assert_eq!(moves.len(), 20);
//! game.apply_move(moves[0]);
//! game.undo_move();
//! assert!(game.white_to_move());
//! ```

mod builder;
mod error;
mod fen;
mod grid;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError, TagError};
pub use grid::Board;
pub use movegen::RuleSet;
pub use state::GameState;
pub use types::{
    cell_tag, Cell, Color, Move, MoveId, MoveList, Piece, PieceTag, Square, BOARD_SIZE, EMPTY_TAG,
};
