use super::super::{Color, GameState, MoveList, Square};

impl GameState {
    /// Pushes and diagonal captures toward the opponent's side.
    ///
    /// Order: single push, double push (only from the start row and only when
    /// the single push is open), then captures. White captures toward the
    /// lower column first, black toward the higher one. A pawn standing on the
    /// far row has nowhere to go.
    pub(crate) fn pawn_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        let side = self.side_to_move();
        let dir = side.pawn_direction();

        let Some(one) = from.offset(dir, 0) else {
            return moves;
        };
        if self.board.is_empty(one) {
            moves.push(self.move_between(from, one));
            if from.row() == side.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0).filter(|&sq| self.board.is_empty(sq)) {
                    moves.push(self.move_between(from, two));
                }
            }
        }

        let capture_cols: [isize; 2] = match side {
            Color::White => [-1, 1],
            Color::Black => [1, -1],
        };
        let enemy = side.opponent();
        for dc in capture_cols {
            if let Some(to) = from.offset(dir, dc) {
                if self.board.color_on(to) == Some(enemy) {
                    moves.push(self.move_between(from, to));
                }
            }
        }
        moves
    }
}
