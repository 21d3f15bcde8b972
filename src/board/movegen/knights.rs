use super::super::{GameState, MoveList, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

impl GameState {
    pub(crate) fn knight_moves(&self, from: Square) -> MoveList {
        self.step_moves(from, &KNIGHT_OFFSETS)
    }
}
