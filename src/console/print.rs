use std::fmt::Write as _;

use super::glyphs::glyph;
use super::layout::{BoardLayout, Shade};
use crate::board::{cell_tag, Board, GameState, MoveList, Square, BOARD_SIZE};

/// Render the grid with rank labels on the left and files underneath.
///
/// With `glyphs` off every square shows its two-character tag (`__` when
/// empty). With glyphs on, pieces are Unicode figures and empty squares show
/// their shade.
#[must_use]
pub fn render_board(board: &Board, glyphs: bool) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let label = Square(row, 0).rank();
        out.push(label);
        for col in 0..BOARD_SIZE {
            let sq = Square(row, col);
            out.push(' ');
            let cell = board.get(sq);
            if glyphs {
                let tag = cell_tag(cell);
                let ch = glyph(tag).unwrap_or(match BoardLayout::shade(sq) {
                    Shade::Light => '.',
                    Shade::Dark => ':',
                });
                out.push(ch);
            } else {
                out.push_str(cell_tag(cell));
            }
        }
        out.push('\n');
    }
    out.push(' ');
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push(Square(0, col).file());
        if !glyphs {
            out.push(' ');
        }
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

#[must_use]
pub fn render_position(game: &GameState, glyphs: bool) -> String {
    let mut out = render_board(game.board(), glyphs);
    let _ = writeln!(out, "side {}", game.side_to_move());
    out
}

/// Space-separated move notations, in list order.
#[must_use]
pub fn format_moves(moves: &MoveList) -> String {
    moves
        .iter()
        .map(|m| m.chess_notation())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_rendering_of_start_position() {
        let text = render_board(&Board::starting_position(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 bR bN bB bQ bK bB bN bR");
        assert_eq!(lines[3], "5 __ __ __ __ __ __ __ __");
        assert_eq!(lines[7], "1 wR wN wB wQ wK wB wN wR");
        assert_eq!(lines[8], "  a  b  c  d  e  f  g  h");
    }

    #[test]
    fn glyph_rendering_shades_empty_squares() {
        let text = render_board(&Board::starting_position(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        // row 2 starts on a light square
        assert_eq!(lines[2], "6 . : . : . : . :");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn position_reports_side() {
        let game = GameState::new();
        assert!(render_position(&game, false).ends_with("side White\n"));
    }

    #[test]
    fn moves_are_joined_in_order() {
        let game = GameState::new();
        let text = format_moves(&game.moves_from(Square(7, 1)));
        assert_eq!(text, "b1c3 b1a3");
    }
}
