use super::super::{Color, GameState, MoveList, Square};
use super::RuleSet;

const UP: (isize, isize) = (-1, 0);
const DOWN: (isize, isize) = (1, 0);
const LEFT: (isize, isize) = (0, -1);
const RIGHT: (isize, isize) = (0, 1);

/// Diagonal scan order, shared by both colors.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// A sliding direction plus the color a ray may land on when it hits a piece.
#[derive(Clone, Copy, Debug)]
struct Ray {
    dir: (isize, isize),
    captures: Color,
}

impl Ray {
    const fn new(dir: (isize, isize), captures: Color) -> Self {
        Ray { dir, captures }
    }
}

impl GameState {
    pub(crate) fn rook_moves(&self, from: Square) -> MoveList {
        self.slide(from, &self.rook_rays())
    }

    pub(crate) fn bishop_moves(&self, from: Square) -> MoveList {
        self.slide(from, &self.bishop_rays())
    }

    /// Rook moves followed by bishop moves.
    pub(crate) fn queen_moves(&self, from: Square) -> MoveList {
        let mut moves = self.rook_moves(from);
        moves.append(self.bishop_moves(from));
        moves
    }

    fn rook_rays(&self) -> [Ray; 4] {
        let side = self.side_to_move();
        match (self.rules, side) {
            (RuleSet::Legacy, Color::White) => [
                Ray::new(UP, Color::Black),
                Ray::new(DOWN, Color::Black),
                Ray::new(LEFT, Color::Black),
                Ray::new(RIGHT, Color::Black),
            ],
            // Vertical rays take white pieces, horizontal ones stop on white
            // and land on black.
            (RuleSet::Legacy, Color::Black) => [
                Ray::new(DOWN, Color::White),
                Ray::new(UP, Color::White),
                Ray::new(RIGHT, Color::Black),
                Ray::new(LEFT, Color::Black),
            ],
            (RuleSet::Mirrored, _) => {
                let enemy = side.opponent();
                [UP, DOWN, LEFT, RIGHT].map(|dir| Ray::new(dir, enemy))
            }
        }
    }

    fn bishop_rays(&self) -> [Ray; 4] {
        let captures = match self.rules {
            RuleSet::Legacy => Color::Black,
            RuleSet::Mirrored => self.side_to_move().opponent(),
        };
        DIAGONALS.map(|dir| Ray::new(dir, captures))
    }

    /// Walk each ray in order: empty squares are landings, the first occupied
    /// square is a landing only if it holds the ray's capture color, and ends
    /// the ray either way.
    fn slide(&self, from: Square, rays: &[Ray]) -> MoveList {
        let mut moves = MoveList::new();
        for ray in rays {
            let (dr, dc) = ray.dir;
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.board[to] {
                    None => moves.push(self.move_between(from, to)),
                    Some(tag) => {
                        if tag.color == ray.captures {
                            moves.push(self.move_between(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
