//! Error types for board parsing.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece tag parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag is not exactly two characters
    InvalidLength { tag: String },
    /// First character is not `w` or `b`
    InvalidColor { char: char },
    /// Second character is not one of p, R, N, B, Q, K
    InvalidPiece { char: char },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::InvalidLength { tag } => {
                write!(f, "Piece tag '{tag}' must be two characters")
            }
            TagError::InvalidColor { char } => {
                write!(f, "Invalid side '{char}' in piece tag, expected 'w' or 'b'")
            }
            TagError::InvalidPiece { char } => {
                write!(f, "Invalid piece '{char}' in piece tag")
            }
        }
    }
}

impl std::error::Error for TagError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not a candidate in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string is empty
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// More than eight ranks in the placement field
    TooManyRanks { found: usize },
    /// Fewer than eight ranks in the placement field
    TooFewRanks { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Rank ends before its eighth file
    TooFewFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN string is empty"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyRanks { found } => {
                write!(f, "FEN has {found} ranks, expected 8")
            }
            FenError::TooFewRanks { found } => {
                write!(f, "FEN has only {found} ranks, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Only {files} files in rank {rank}, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for FenError {}
