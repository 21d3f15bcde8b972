use super::error::FenError;
use super::{Board, Color, GameState, Piece, PieceTag, RuleSet, Square, BOARD_SIZE};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Only piece placement and side to move are read; castling, en passant
    /// and clock fields are accepted and ignored. A missing side field means
    /// white to move. The move log starts empty.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Self::try_from_fen_with_rules(fen, RuleSet::default())
    }

    pub fn try_from_fen_with_rules(fen: &str, rules: RuleSet) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let mut board = Board::empty();
        let mut ranks = 0;
        for (row, rank_str) in placement.split('/').enumerate() {
            if row >= BOARD_SIZE {
                return Err(FenError::TooManyRanks { found: row + 1 });
            }
            ranks = row + 1;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    col += skip as usize;
                    if col > BOARD_SIZE {
                        return Err(FenError::TooManyFiles { rank: row, files: col });
                    }
                    continue;
                }
                let (color, piece) = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= BOARD_SIZE {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: col + 1,
                    });
                }
                board[Square(row, col)] = Some(PieceTag::new(color, piece));
                col += 1;
            }
            if col < BOARD_SIZE {
                return Err(FenError::TooFewFiles { rank: row, files: col });
            }
        }
        if ranks < BOARD_SIZE {
            return Err(FenError::TooFewRanks { found: ranks });
        }

        let side = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        engine_log!(info, "loaded position {fen}");
        Ok(GameState::from_parts(board, side, rules))
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Piece placement and side to move, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for cells in self.board.rows() {
            let mut row = String::new();
            let mut empty = 0;
            for cell in cells {
                match cell {
                    None => empty += 1,
                    Some(tag) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(tag.piece.to_fen_char(tag.color));
                    }
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        format!("{} {}", rows.join("/"), self.side_to_move().to_char())
    }
}
