use crate::board::{Board, Color};
use crate::error::RulesError;
use crate::moves::square_control::is_king_attacked;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-side "king is attacked" flags as last computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderCheck {
    pub white: bool,
    pub black: bool,
}

impl UnderCheck {
    #[inline(always)]
    pub fn get(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, color: Color, value: bool) {
        match color {
            Color::White => self.white = value,
            Color::Black => self.black = value,
        }
    }

    /// Recompute both flags from scratch.
    pub fn of_board(board: &Board) -> Result<Self, RulesError> {
        Ok(UnderCheck {
            white: is_king_attacked(Color::White, board)?,
            black: is_king_attacked(Color::Black, board)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Check,
}

/// One line of the game's status log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub kind: StatusKind,
    pub color: Color,
    pub text: String,
}

impl StatusEntry {
    pub fn check(color: Color) -> Self {
        StatusEntry {
            kind: StatusKind::Check,
            color,
            text: format!("{color} is under check"),
        }
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
