use std::fmt;
use std::ops::{Index, IndexMut};

use super::{cell_tag, Cell, Color, Piece, PieceTag, Square, BOARD_SIZE};

const BACK_RANK: [Piece; BOARD_SIZE] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8×8 grid of square contents, indexed `[row][col]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening layout: black on rows 0-1, white on rows 6-7.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, &piece) in BACK_RANK.iter().enumerate() {
                board.set(Square(back, col), Some(PieceTag::new(color, piece)));
                board.set(Square(pawns, col), Some(PieceTag::new(color, Piece::Pawn)));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.0][sq.1] = cell;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|tag| tag.color)
    }

    /// Two-character tag on `sq`, `__` when empty
    #[inline]
    #[must_use]
    pub fn tag_at(&self, sq: Square) -> &'static str {
        cell_tag(self.get(sq))
    }

    /// Row-by-row view of the grid for renderers
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceTag)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|tag| (sq, tag)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.0][sq.1]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.cells[sq.0][sq.1]
    }
}

/// One line per row, tags separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row.iter().map(|&cell| cell_tag(cell)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout_matches_tags() {
        let board = Board::starting_position();
        let expected = "\
bR bN bB bQ bK bB bN bR
bp bp bp bp bp bp bp bp
__ __ __ __ __ __ __ __
__ __ __ __ __ __ __ __
__ __ __ __ __ __ __ __
__ __ __ __ __ __ __ __
wp wp wp wp wp wp wp wp
wR wN wB wQ wK wB wN wR
";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn starting_layout_has_thirty_two_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.color_on(Square(0, 4)), Some(Color::Black));
        assert_eq!(board.tag_at(Square(7, 3)), "wQ");
        assert!(board.is_empty(Square(4, 4)));
    }

    #[test]
    fn index_mut_writes_cell() {
        let mut board = Board::empty();
        board[Square(3, 3)] = Some(PieceTag::new(Color::White, Piece::Rook));
        assert_eq!(board.rows()[3][3], Some(PieceTag::new(Color::White, Piece::Rook)));
    }
}
