//! Core chess types.
//!
//! This module contains the value types shared by the board and move generator:
//! - `Piece`, `Color` and `PieceTag` - piece kinds, sides, and their two-character tags
//! - `Square` - (row, col) coordinate with algebraic notation
//! - `Move`, `MoveId` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveId, MoveList};
pub use piece::{cell_tag, Cell, Color, Piece, PieceTag, EMPTY_TAG};
pub use square::{Square, BOARD_SIZE};
