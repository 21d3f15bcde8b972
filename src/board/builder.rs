//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_state::board::{Color, Piece, PositionBuilder, Square};
//!
//! let game = PositionBuilder::new()
//!     .piece(Square(4, 4), Color::White, Piece::Rook)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.valid_moves().len(), 14);
//! ```

use super::{Board, Color, GameState, Piece, PieceTag, RuleSet, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    rules: RuleSet,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new builder over an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            rules: RuleSet::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting_position(),
            ..Self::new()
        }
    }

    /// Put a piece on a square, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        self.board[sq] = Some(PieceTag::new(color, piece));
        self
    }

    /// Clear a square.
    #[must_use]
    pub fn clear(mut self, sq: Square) -> Self {
        self.board[sq] = None;
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Build the game; the move log starts empty.
    #[must_use]
    pub fn build(self) -> GameState {
        GameState::from_parts(self.board, self.side_to_move, self.rules)
    }
}
