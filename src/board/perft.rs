use super::{GameState, Move};

impl GameState {
    /// Count leaf nodes of the candidate-move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.apply_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }

    /// Per-root-move node counts, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let mut counts = Vec::new();
        if depth == 0 {
            return counts;
        }
        for m in self.valid_moves() {
            self.apply_move(m);
            let nodes = self.perft(depth - 1);
            self.undo_move();
            counts.push((m, nodes));
        }
        counts
    }
}
