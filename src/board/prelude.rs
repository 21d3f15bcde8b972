//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_state::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, Color, FenError, GameState, Move, MoveList, MoveParseError, Piece, PieceTag,
    PositionBuilder, RuleSet, Square, SquareError,
};
