//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{cell_tag, Cell};
use super::square::Square;
use crate::board::Board;

/// Positional identity of a move.
///
/// Two moves with the same endpoints share an id whatever pieces they carry.
/// Packed encoding:
/// - bits 0-5:  from square (0-63)
/// - bits 6-11: to square (0-63)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveId {
    pub from: Square,
    pub to: Square,
}

impl MoveId {
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        (self.from.as_index() as u16) | ((self.to.as_index() as u16) << 6)
    }

    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        MoveId {
            from: Square::from_index((value & 0x3F) as usize),
            to: Square::from_index(((value >> 6) & 0x3F) as usize),
        }
    }
}

/// A single board transition.
///
/// Records the cells found on both endpoints when the move was built, which is
/// everything needed to undo it. Equality and hashing only look at the
/// [`MoveId`].
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Cell,
    piece_captured: Cell,
}

impl Move {
    /// Build a move from `from` to `to` against a board snapshot.
    #[inline]
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Move {
            from,
            to,
            piece_moved: board[from],
            piece_captured: board[to],
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The cell that stood on the start square
    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> Cell {
        self.piece_moved
    }

    /// The cell that stood on the end square (`None` for a quiet move)
    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Cell {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> MoveId {
        MoveId {
            from: self.from,
            to: self.to,
        }
    }

    /// Decimal identity `from_row*1000 + from_col*100 + to_row*10 + to_col`.
    #[must_use]
    pub const fn legacy_id(&self) -> u32 {
        (self.from.0 * 1000 + self.from.1 * 100 + self.to.0 * 10 + self.to.1) as u32
    }

    /// Start square followed by end square, e.g. `e2e4`.
    #[must_use]
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({}{} {}",
            self.from,
            self.to,
            cell_tag(self.piece_moved)
        )?;
        if let Some(captured) = self.piece_captured {
            write!(f, "x{captured}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Ordered list of candidate moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn append(&mut self, mut other: MoveList) {
        self.moves.append(&mut other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Membership by move identity
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// The listed move with the same identity as `mv`, if any
    #[must_use]
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.moves.iter().find(|m| *m == mv).copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}
