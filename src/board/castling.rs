// src/board/castling.rs

use super::{Color, Piece};
use crate::moves::types::PieceRef;
use serde::{Deserialize, Serialize};

/// Cell of the rook on the left edge of the near rank.
pub const LEFT_ROOK_CELL: u8 = 0;
/// Cell of the rook on the right edge of the near rank.
pub const RIGHT_ROOK_CELL: u8 = 7;

/// What is still possible for one side.
///
/// The `allowed_with_*` flags only ever go from true to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastlingRights {
    /// Set externally (e.g. while the king is in check); never touched here.
    pub temporarily_disallowed: bool,
    pub allowed_with_left_rook: bool,
    pub allowed_with_right_rook: bool,
}

impl CastlingRights {
    pub const fn full() -> Self {
        CastlingRights {
            temporarily_disallowed: false,
            allowed_with_left_rook: true,
            allowed_with_right_rook: true,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::full()
    }
}

/// Castling rights of both sides. `None` means castling is gone for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CastlingState {
    pub white: Option<CastlingRights>,
    pub black: Option<CastlingRights>,
}

impl CastlingState {
    /// Both sides may still castle on either wing.
    pub const fn initial() -> Self {
        CastlingState {
            white: Some(CastlingRights::full()),
            black: Some(CastlingRights::full()),
        }
    }

    /// Neither side may castle.
    pub const fn none() -> Self {
        CastlingState {
            white: None,
            black: None,
        }
    }

    #[inline(always)]
    pub fn get(&self, color: Color) -> Option<&CastlingRights> {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    #[inline(always)]
    fn slot_mut(&mut self, color: Color) -> &mut Option<CastlingRights> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Mark one side's castling as suspended (or lift the suspension).
    /// No effect once that side's rights are gone.
    pub fn set_temporarily_disallowed(&mut self, color: Color, disallowed: bool) {
        if let Some(rights) = self.slot_mut(color) {
            rights.temporarily_disallowed = disallowed;
        }
    }

    /// Rights after `moved` leaves its square. Pure: `self` is untouched.
    ///
    /// A king move forfeits castling for its side. A rook leaving the left
    /// edge clears the left flag, one leaving the right edge clears the
    /// right flag; if the other flag is already false the side's rights are
    /// dropped entirely. Other pieces change nothing.
    pub fn after_move(&self, moved: &PieceRef) -> CastlingState {
        let Some(current) = self.get(moved.color).copied() else {
            return *self;
        };

        let mut next = *self;
        let slot = next.slot_mut(moved.color);

        match moved.piece {
            Piece::King => *slot = None,
            Piece::Rook if moved.square.cell == LEFT_ROOK_CELL => {
                if !current.allowed_with_right_rook {
                    *slot = None;
                } else {
                    *slot = Some(CastlingRights {
                        allowed_with_left_rook: false,
                        ..current
                    });
                }
            }
            Piece::Rook if moved.square.cell == RIGHT_ROOK_CELL => {
                if !current.allowed_with_left_rook {
                    *slot = None;
                } else {
                    *slot = Some(CastlingRights {
                        allowed_with_right_rook: false,
                        ..current
                    });
                }
            }
            _ => {}
        }

        next
    }
}

/// Free-function form of [`CastlingState::after_move`].
pub fn update_castling_rights(moved: &PieceRef, previous: &CastlingState) -> CastlingState {
    previous.after_move(moved)
}
