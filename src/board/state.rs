use super::{Board, Color, Move, MoveParseError, RuleSet, Square};

/// A game in progress: board, side to move, and the log of applied moves.
///
/// The log and the side to move stay in step: each applied move flips the
/// side, each undo flips it back, so an even-length log means the side that
/// moved first is to move again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) move_log: Vec<Move>,
    pub(crate) rules: RuleSet,
}

impl GameState {
    /// Standard starting position, white to move, empty log.
    #[must_use]
    pub fn new() -> Self {
        GameState::with_rules(RuleSet::default())
    }

    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        GameState {
            board: Board::starting_position(),
            white_to_move: true,
            move_log: Vec::new(),
            rules,
        }
    }

    pub(crate) fn from_parts(board: Board, side_to_move: Color, rules: RuleSet) -> Self {
        GameState {
            board,
            white_to_move: side_to_move == Color::White,
            move_log: Vec::new(),
            rules,
        }
    }

    /// Back to the starting position, keeping the rule set.
    pub fn reset(&mut self) {
        *self = GameState::with_rules(self.rules);
        engine_log!(info, "game reset ({:?} rules)", self.rules);
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Applied moves, oldest first
    #[inline]
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        if rules != self.rules {
            engine_log!(info, "rule set {:?} -> {:?}", self.rules, rules);
            self.rules = rules;
        }
    }

    /// Build a move between two squares against the current board.
    #[must_use]
    pub fn move_between(&self, from: Square, to: Square) -> Move {
        Move::new(from, to, &self.board)
    }

    /// The candidate move from `from` to `to`, if the generator produces it.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.valid_moves().find(&self.move_between(from, to))
    }

    /// Decode a four-character move such as `e2e4` and check it is a candidate.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let notation = notation.trim();
        let len = notation.chars().count();
        if len != 4 || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;
        self.find_move(from, to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
