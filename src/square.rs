use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// A cell on the board, addressed as (row, cell).
///
/// Row 0 is the far rank (top of the board as rendered), row 7 the near one.
/// Construction through [`Square::new`] or [`Square::offset`] guarantees the
/// coordinates are on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub cell: u8,
}

impl Square {
    /// Returns the square if `(row, cell)` lies on the board.
    #[inline(always)]
    pub fn new(row: i32, cell: i32) -> Option<Self> {
        if Self::in_bounds(row, cell) {
            Some(Square {
                row: row as u8,
                cell: cell as u8,
            })
        } else {
            None
        }
    }

    /// `0 <= row < 8 && 0 <= cell < 8`
    #[inline(always)]
    pub fn in_bounds(row: i32, cell: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&cell)
    }

    /// Step by a (row, cell) delta; `None` when the step leaves the board.
    #[inline(always)]
    pub fn offset(self, d_row: i32, d_cell: i32) -> Option<Self> {
        Square::new(self.row as i32 + d_row, self.cell as i32 + d_cell)
    }

    /// The same physical square seen from the other side of the board.
    #[inline(always)]
    pub fn mirrored(self) -> Self {
        Square {
            row: (BOARD_SIZE - 1) as u8 - self.row,
            cell: (BOARD_SIZE - 1) as u8 - self.cell,
        }
    }

    #[inline(always)]
    pub(crate) fn row_idx(self) -> usize {
        self.row as usize
    }

    #[inline(always)]
    pub(crate) fn cell_idx(self) -> usize {
        self.cell as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_steps_off_the_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Square::new(1, 2));

        let far = Square::new(7, 7).unwrap();
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(0, 1), None);
    }

    #[test]
    fn mirrored_is_an_involution() {
        let sq = Square::new(6, 1).unwrap();
        assert_eq!(sq.mirrored(), Square::new(1, 6).unwrap());
        assert_eq!(sq.mirrored().mirrored(), sq);
    }
}
