//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Rank digit for each row; row 0 is the black back rank.
const ROW_TO_RANK: [char; BOARD_SIZE] = ['8', '7', '6', '5', '4', '3', '2', '1'];
const COL_TO_FILE: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

fn file_to_col(file: char) -> Option<usize> {
    COL_TO_FILE.iter().position(|&f| f == file)
}

fn rank_to_row(rank: char) -> Option<usize> {
    ROW_TO_RANK.iter().position(|&r| r == rank)
}

/// A square on the board, represented as (row, col).
///
/// Rows grow downward from the black back rank, so `Square(0, 0)` is a8 and
/// `Square(7, 7)` is h1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Shift by a row/column delta, `None` when the result leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Index 0-63 in row-major order (a8=0, h8=7, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// All 64 squares in row-major scan order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }

    /// File letter of this square's column
    #[inline]
    #[must_use]
    pub fn file(self) -> char {
        COL_TO_FILE[self.1]
    }

    /// Rank digit of this square's row
    #[inline]
    #[must_use]
    pub fn rank(self) -> char {
        ROW_TO_RANK[self.0]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = file_to_col(file).ok_or_else(invalid)?;
        let row = rank_to_row(rank).ok_or_else(invalid)?;
        Ok(Square(row, col))
    }
}
