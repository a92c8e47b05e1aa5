use crate::board::{Board, CastlingState, Color, Piece};
use crate::error::RulesError;
use crate::square::Square;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Upper bound on pseudo-legal destinations for one piece
/// (queen in the open: 27; king: 8 steps + 2 castles).
pub const MAX_CANDIDATES: usize = 32;

/// Fixed-capacity destination list used on the hot path.
pub type CandidateList = ArrayVec<Square, MAX_CANDIDATES>;

pub trait MoveBuffer: Deref<Target = [Square]> + DerefMut {
    fn push(&mut self, sq: Square);
    fn clear(&mut self);
}

impl MoveBuffer for Vec<Square> {
    fn push(&mut self, sq: Square) {
        self.push(sq);
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<const N: usize> MoveBuffer for ArrayVec<Square, N> {
    fn push(&mut self, sq: Square) {
        self.push(sq);
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// The piece being asked about. Never stored; built per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRef {
    pub piece: Piece,
    pub color: Color,
    pub square: Square,
}

impl PieceRef {
    pub fn new(piece: Piece, color: Color, square: Square) -> Self {
        PieceRef {
            piece,
            color,
            square,
        }
    }

    /// Read whatever stands on `square`.
    pub fn on_board(board: &Board, square: Square) -> Result<Self, RulesError> {
        let (color, piece) = board
            .piece_at(square)
            .ok_or(RulesError::EmptySquare(square))?;
        Ok(PieceRef::new(piece, color, square))
    }

    /// Same color and square, different kind. Used by the check detector to
    /// look outward from the king as if it were another piece.
    #[inline(always)]
    pub(crate) fn as_kind(self, piece: Piece) -> Self {
        PieceRef { piece, ..self }
    }
}

impl fmt::Display for PieceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.piece, self.square)
    }
}

/// Knobs for the generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveOptions<'a> {
    /// Consulted by the king generator only.
    pub castling: Option<&'a CastlingState>,
    /// Limit sliding rays to a single step.
    pub single_step: bool,
}

impl<'a> MoveOptions<'a> {
    pub fn with_castling(castling: &'a CastlingState) -> Self {
        MoveOptions {
            castling: Some(castling),
            single_step: false,
        }
    }

    pub fn single_step() -> Self {
        MoveOptions {
            castling: None,
            single_step: true,
        }
    }
}

/// Record of a move played through [`crate::moves::execute::play_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub piece: PieceRef,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Rook (from, to) when the move was a castle.
    pub castling_rook: Option<(Square, Square)>,
}

impl PlayedMove {
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        self.castling_rook.is_some()
    }

    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.piece, self.to)?;

        if f.alternate() {
            if self.is_castling() {
                f.write_str(" (castle)")?;
            } else if let Some(captured) = self.captured {
                write!(f, " (x{captured})")?;
            }
        }
        Ok(())
    }
}
