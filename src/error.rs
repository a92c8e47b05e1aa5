//! Error type for rules-engine operations.

use crate::board::Color;
use crate::square::Square;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// No king of this color on the board
    KingNotFound(Color),
    /// Color name other than white/black
    UnknownColor(String),
    /// Piece name outside {pawn, knight, bishop, rook, queen, king}
    UnknownPiece(String),
    /// Coordinates outside the 8x8 grid
    OutOfBounds { row: i32, cell: i32 },
    /// Nothing to move on this square
    EmptySquare(Square),
    /// The piece belongs to the side that is not to move
    NotYourPiece { square: Square, color: Color },
    /// Destination is not among the piece's legal moves
    IllegalMove { from: Square, to: Square },
    /// Board fails structural validation
    InvalidBoard(String),
    /// Malformed placement string
    InvalidFen(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::KingNotFound(color) => write!(f, "no {color} king on the board"),
            RulesError::UnknownColor(name) => write!(f, "unknown color '{name}'"),
            RulesError::UnknownPiece(name) => write!(f, "unknown piece kind '{name}'"),
            RulesError::OutOfBounds { row, cell } => {
                write!(f, "square ({row}, {cell}) is off the board")
            }
            RulesError::EmptySquare(sq) => write!(f, "square {sq} is empty"),
            RulesError::NotYourPiece { square, color } => {
                write!(f, "piece on {square} belongs to {color}, who is not to move")
            }
            RulesError::IllegalMove { from, to } => write!(f, "illegal move {from} -> {to}"),
            RulesError::InvalidBoard(msg) => write!(f, "invalid board: {msg}"),
            RulesError::InvalidFen(msg) => write!(f, "invalid placement: {msg}"),
        }
    }
}

impl std::error::Error for RulesError {}
