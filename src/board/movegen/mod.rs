//! Candidate move enumeration.
//!
//! Generation is pseudo-legal: a move that leaves the mover's king capturable
//! is still a candidate. The per-piece rules depend on the active [`RuleSet`].

mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, GameState, MoveList, Piece, Square};

/// Which flavor of piece rules the generator follows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleSet {
    /// The historical rules, black/white asymmetries included:
    /// - black rooks scan down, up, right, left and their horizontal rays
    ///   stop at white pieces but land on black ones;
    /// - bishops of both colors land only on black pieces;
    /// - knights and kings only move when white is to move.
    #[default]
    Legacy,
    /// Symmetric rules: every slider captures the opponent, rays scan in the
    /// same order for both colors, knights and kings move for both sides.
    Mirrored,
}

impl RuleSet {
    pub const ALL: [RuleSet; 2] = [RuleSet::Legacy, RuleSet::Mirrored];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleSet::Legacy => "legacy",
            RuleSet::Mirrored => "mirrored",
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl GameState {
    /// Every candidate move for the side to move.
    ///
    /// This is meant to drop moves that leave the king in check, but no check
    /// detection exists; the result is exactly [`GameState::all_possible_moves`].
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        self.all_possible_moves()
    }

    /// Pseudo-legal moves, scanning squares in row-major order and listing each
    /// piece's moves in its generator's order.
    #[must_use]
    pub fn all_possible_moves(&self) -> MoveList {
        let side = self.side_to_move();
        let mut moves = MoveList::new();
        for (from, tag) in self.board.pieces() {
            if tag.color == side {
                moves.append(self.piece_moves(from, tag.piece));
            }
        }
        engine_log!(trace, "{} candidates for {} ({} rules)", moves.len(), side, self.rules);
        moves
    }

    /// Candidates starting on `from`; empty unless it holds a piece of the side
    /// to move.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        match self.board[from] {
            Some(tag) if tag.color == self.side_to_move() => self.piece_moves(from, tag.piece),
            _ => MoveList::new(),
        }
    }

    fn piece_moves(&self, from: Square, piece: Piece) -> MoveList {
        match piece {
            Piece::Pawn => self.pawn_moves(from),
            Piece::Rook => self.rook_moves(from),
            Piece::Knight => self.knight_moves(from),
            Piece::Bishop => self.bishop_moves(from),
            Piece::Queen => self.queen_moves(from),
            Piece::King => self.king_moves(from),
        }
    }

    /// Knights and kings share the single-step rule: any on-board target not
    /// holding a piece of the mover's color.
    fn step_moves(&self, from: Square, offsets: &[(isize, isize)]) -> MoveList {
        let side = self.side_to_move();
        if self.rules == RuleSet::Legacy && side != Color::White {
            return MoveList::new();
        }
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.board.color_on(to) != Some(side))
            .map(|to| self.move_between(from, to))
            .collect()
    }
}
