//! Pixel geometry of the board window.
//!
//! The board fills a square window split into equal squares; row 0 is drawn
//! at the top, and the top-left square is light.

use crate::board::{Square, BOARD_SIZE};

pub const WIDTH: u32 = 512;
pub const HEIGHT: u32 = 512;
pub const SQ_SIZE: u32 = HEIGHT / BOARD_SIZE as u32;

/// Light or dark board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    square_size: u32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout {
            square_size: SQ_SIZE,
        }
    }
}

impl BoardLayout {
    /// Square under the pixel `(x, y)`, `None` outside the board.
    #[must_use]
    pub fn square_at(&self, x: i64, y: i64) -> Option<Square> {
        if x < 0 || y < 0 {
            return None;
        }
        let size = i64::from(self.square_size);
        let row = usize::try_from(y / size).ok()?;
        let col = usize::try_from(x / size).ok()?;
        Square::new(row, col)
    }

    #[must_use]
    pub fn shade(sq: Square) -> Shade {
        if (sq.row() + sq.col()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}
