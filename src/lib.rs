//! Chess game state and pseudo-legal move generation on an 8×8 tag grid.
//!
//! # Example
//! ```
//! use chess_state::board::{GameState, Move, Square};
//!
//! let mut game = GameState::new();
//! let mv = Move::new(Square(6, 4), Square(4, 4), game.board());
//! assert!(game.valid_moves().contains(&mv));
//! game.apply_move(mv);
//! assert!(!game.white_to_move());
//! ```

/// Forwards to the `log` facade when the `logging` feature is on.
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            if false {
                let _ = format!($($arg)+);
            }
        }
    }};
}

pub mod board;
pub mod config;
pub mod console;

pub use board::{Board, Color, GameState, Move, MoveList, Piece, PieceTag, RuleSet, Square};
pub use config::GameConfig;
