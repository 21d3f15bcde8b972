use super::{GameState, Move};

impl GameState {
    /// Play `mv` on the board.
    ///
    /// No legality check happens here; callers gate on membership in
    /// [`GameState::valid_moves`].
    pub fn apply_move(&mut self, mv: Move) {
        self.board.set(mv.from(), None);
        self.board.set(mv.to(), mv.piece_moved());
        self.move_log.push(mv);
        self.white_to_move = !self.white_to_move;
        engine_log!(debug, "apply {:?} (log {})", mv, self.move_log.len());
    }

    /// Take back the most recent move. Does nothing on an empty log.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        self.board.set(mv.from(), mv.piece_moved());
        self.board.set(mv.to(), mv.piece_captured());
        self.white_to_move = !self.white_to_move;
        engine_log!(debug, "undo {:?} (log {})", mv, self.move_log.len());
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, GameState, Piece, PieceTag, Square};

    #[test]
    fn apply_moves_piece_and_flips_side() {
        let mut game = GameState::new();
        let mv = game.move_between(Square(6, 4), Square(4, 4));
        game.apply_move(mv);
        assert_eq!(game.board()[Square(6, 4)], None);
        assert_eq!(
            game.board()[Square(4, 4)],
            Some(PieceTag::new(Color::White, Piece::Pawn))
        );
        assert!(!game.white_to_move());
        assert_eq!(game.move_log(), &[mv]);
    }

    #[test]
    fn undo_on_empty_log_is_noop() {
        let mut game = GameState::new();
        assert_eq!(game.undo_move(), None);
        assert!(game.white_to_move());
        assert_eq!(game.board(), &Board::starting_position());
    }

    #[test]
    fn undo_restores_captured_piece() {
        let mut game = GameState::new();
        let mv = game.move_between(Square(7, 3), Square(1, 3));
        game.apply_move(mv);
        assert_eq!(
            game.board()[Square(1, 3)],
            Some(PieceTag::new(Color::White, Piece::Queen))
        );
        assert_eq!(game.undo_move(), Some(mv));
        assert_eq!(game.board(), &Board::starting_position());
        assert!(game.white_to_move());
    }
}
