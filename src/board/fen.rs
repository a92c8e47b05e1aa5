// Piece-placement strings for building positions.
//
// Only the placement field is read; anything after the first whitespace is
// ignored. The first rank in the string is row 0.

use super::{Board, Color, Piece};
use crate::error::RulesError;
use crate::square::{BOARD_SIZE, Square};

/// Uppercase = White, lowercase = Black.
#[inline]
pub(super) fn glyph(piece: Piece, color: Color) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

#[inline]
fn from_glyph(ch: char) -> Option<(Piece, Color)> {
    let piece = match ch.to_ascii_lowercase() {
        'p' => Piece::Pawn,
        'n' => Piece::Knight,
        'b' => Piece::Bishop,
        'r' => Piece::Rook,
        'q' => Piece::Queen,
        'k' => Piece::King,
        _ => return None,
    };
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some((piece, color))
}

impl Board {
    /// Replace the contents of the board with a placement string.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), RulesError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| RulesError::InvalidFen("empty string".into()))?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(RulesError::InvalidFen(format!(
                "expected {BOARD_SIZE} ranks, found {}",
                ranks.len()
            )));
        }

        let mut out = Board::new_empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut cell = 0usize;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    cell += skip as usize;
                } else {
                    let (piece, color) = from_glyph(ch).ok_or_else(|| {
                        RulesError::InvalidFen(format!("invalid piece character '{ch}'"))
                    })?;
                    let sq = Square::new(row as i32, cell as i32).ok_or_else(|| {
                        RulesError::InvalidFen(format!("rank {row} overflows"))
                    })?;
                    out.place(sq, color, piece);
                    cell += 1;
                }
                if cell > BOARD_SIZE {
                    return Err(RulesError::InvalidFen(format!("rank {row} overflows")));
                }
            }
            if cell != BOARD_SIZE {
                return Err(RulesError::InvalidFen(format!(
                    "rank {row} has {cell} cells"
                )));
            }
        }

        *self = out;
        Ok(())
    }

    /// Placement string, row 0 first.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for &value in row {
                match (Color::of_value(value), Piece::from_value(value)) {
                    (Some(color), Some(piece)) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(glyph(piece, color));
                    }
                    _ => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }
}
