use super::super::{GameState, MoveList, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl GameState {
    pub(crate) fn king_moves(&self, from: Square) -> MoveList {
        self.step_moves(from, &KING_OFFSETS)
    }
}
