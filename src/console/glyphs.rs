//! Piece glyphs, keyed by piece tag and built once per process.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::board::{Color, Piece, PieceTag};

static GLYPHS: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    PieceTag::all()
        .map(|tag| (tag.tag(), glyph_for(tag)))
        .collect()
});

fn glyph_for(tag: PieceTag) -> char {
    match (tag.color, tag.piece) {
        (Color::White, Piece::King) => '♔',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Pawn) => '♙',
        (Color::Black, Piece::King) => '♚',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Pawn) => '♟',
    }
}

/// Glyph for a piece tag string such as `wK`.
#[must_use]
pub fn glyph(tag: &str) -> Option<char> {
    GLYPHS.get(tag).copied()
}
