mod fen;

use crate::error::RulesError;
use crate::square::{BOARD_SIZE, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod castling;
pub use castling::*;

/// Empty cell value.
pub const EMPTY: i8 = 0;

/// Starting layout, black on rows 0–1, white on rows 6–7.
const START_ROWS: [[i8; BOARD_SIZE]; BOARD_SIZE] = [
    [-4, -2, -3, -5, -6, -3, -2, -4],
    [-1, -1, -1, -1, -1, -1, -1, -1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [4, 2, 3, 5, 6, 3, 2, 4],
];

/// Side of a piece. Positive cell values are white, negative are black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Piece kind. Discriminants are the magnitudes used on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Piece {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

/// 8×8 grid of signed cell values.
///
/// `0` is empty, magnitude 1–6 is the piece kind and the sign is the color.
/// Row 0 is the far rank. The board is plain data: every simulation works on
/// a clone, never on the caller's copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[i8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces.
    pub fn new_empty() -> Self {
        Board {
            cells: [[EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position, white at the bottom.
    pub fn new() -> Self {
        Board { cells: START_ROWS }
    }

    /// Wrap a raw grid. Values are not checked; see [`Board::validate`].
    pub fn from_rows(cells: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    #[inline(always)]
    pub fn rows(&self) -> &[[i8; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Raw signed value on a square.
    #[inline(always)]
    pub fn value_at(&self, sq: Square) -> i8 {
        self.cells[sq.row_idx()][sq.cell_idx()]
    }

    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.value_at(sq) == EMPTY
    }

    /// Returns the color and piece at a given square, or None if empty.
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let value = self.value_at(sq);
        Some((Color::of_value(value)?, Piece::from_value(value)?))
    }

    /// Returns just the color at a given square, or None if empty.
    #[inline(always)]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        Color::of_value(self.value_at(sq))
    }

    #[inline(always)]
    pub fn set_value(&mut self, sq: Square, value: i8) {
        self.cells[sq.row_idx()][sq.cell_idx()] = value;
    }

    #[inline(always)]
    pub fn place(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set_value(sq, piece.signed(color));
    }

    #[inline(always)]
    pub fn clear_square(&mut self, sq: Square) {
        self.set_value(sq, EMPTY);
    }

    /// The board seen from the other side: row order and cell order both
    /// reversed.
    pub fn rotated(&self) -> Self {
        let mut out = Board::new_empty();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.cells[BOARD_SIZE - 1 - r][BOARD_SIZE - 1 - c] = value;
            }
        }
        out
    }

    /// First square holding the king of `color`, scanning row by row.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let target = Piece::King.signed(color);
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|&v| v == target)
                .and_then(|c| Square::new(r as i32, c as i32))
        })
    }

    /// Function to get exactly what square the king sits on
    #[inline]
    pub fn king_square(&self, color: Color) -> Result<Square, RulesError> {
        self.find_king(color)
            .ok_or(RulesError::KingNotFound(color))
    }

    /// Validate cell values and that each side has exactly one king.
    pub fn validate(&self) -> Result<(), RulesError> {
        let mut kings = [0usize; 2];
        for row in &self.cells {
            for &value in row {
                if value == EMPTY {
                    continue;
                }
                match (Color::of_value(value), Piece::from_value(value)) {
                    (Some(color), Some(Piece::King)) => kings[color as usize] += 1,
                    (Some(_), Some(_)) => {}
                    _ => {
                        return Err(RulesError::InvalidBoard(format!(
                            "cell value {value} is not a piece"
                        )));
                    }
                }
            }
        }

        for color in [Color::White, Color::Black] {
            match kings[color as usize] {
                1 => {}
                0 => return Err(RulesError::KingNotFound(color)),
                n => {
                    return Err(RulesError::InvalidBoard(format!("{n} {color} kings")));
                }
            }
        }
        Ok(())
    }
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for white, -1 for black.
    #[inline(always)]
    pub fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Color of a signed cell value (`value > 0` is white); `None` when empty.
    #[inline(always)]
    pub fn of_value(value: i8) -> Option<Self> {
        match value.signum() {
            1 => Some(Color::White),
            -1 => Some(Color::Black),
            _ => None,
        }
    }

    /// True when `value` holds a piece of the other side (sign product < 0).
    #[inline(always)]
    pub fn is_opponent(self, value: i8) -> bool {
        (self.sign() as i16) * (value as i16) < 0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(RulesError::UnknownColor(s.to_string())),
        }
    }
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Magnitude used on the board (1–6).
    #[inline(always)]
    pub fn code(self) -> i8 {
        self as i8
    }

    /// Board value of this piece for `color`.
    #[inline(always)]
    pub fn signed(self, color: Color) -> i8 {
        self.code() * color.sign()
    }

    /// Decode the kind from a signed cell value; `None` for empty or garbage.
    #[inline(always)]
    pub fn from_value(value: i8) -> Option<Self> {
        match value.unsigned_abs() {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind names are matched case-insensitively.
impl FromStr for Piece {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Piece::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RulesError::UnknownPiece(s.to_string()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl FromStr for Board {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new_empty();
        board.set_fen(s)?;
        Ok(board)
    }
}

/// Row 0 first, one glyph per cell, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r} ")?;
            for &value in row {
                let glyph = match (Color::of_value(value), Piece::from_value(value)) {
                    (Some(color), Some(piece)) => fen::glyph(piece, color),
                    _ => '.',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}
