//! Pseudo-legal destination generators, one per piece kind.
//!
//! Nothing here looks at whether the mover's own king ends up attacked; that
//! is the legal filter's job in [`crate::moves::execute`].

use crate::board::{Board, CastlingState, Color, Piece};
use crate::moves::types::{CandidateList, MAX_CANDIDATES, MoveBuffer, MoveOptions, PieceRef};
use crate::square::{BOARD_SIZE, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Longest possible ray on an 8×8 board.
const MAX_RAY: i32 = BOARD_SIZE as i32 - 1;

/// Rank a pawn must stand on to advance two cells.
const PAWN_START_ROW: u8 = 6;

/// Rook-ray landing cells that make castling on that wing reachable.
const RIGHT_CASTLE_PROBE_CELL: u8 = 6;
const LEFT_CASTLE_PROBE_CELL: u8 = 1;

/// King destination cell when castling towards the right-hand rook.
#[inline(always)]
fn right_castle_target(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 5,
    }
}

/// King destination cell when castling towards the left-hand rook.
#[inline(always)]
fn left_castle_target(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 1,
    }
}

/// Walk each direction until the edge, a friendly piece (excluded) or an
/// enemy piece (included, ray ends there).
pub fn generate_sliding_moves(
    piece: &PieceRef,
    board: &Board,
    directions: &[(i32, i32)],
    opts: &MoveOptions,
    move_list: &mut impl MoveBuffer,
) {
    let steps = if opts.single_step { 1 } else { MAX_RAY };

    for &(d_row, d_cell) in directions {
        for k in 1..=steps {
            let Some(target) = piece.square.offset(d_row * k, d_cell * k) else {
                break;
            };
            let value = board.value_at(target);
            if board.is_empty(target) {
                move_list.push(target);
            } else {
                if piece.color.is_opponent(value) {
                    move_list.push(target);
                }
                break;
            }
        }
    }
}

/// Pawns always advance towards row 0, whatever their color.
pub fn generate_pawn_moves(piece: &PieceRef, board: &Board, move_list: &mut impl MoveBuffer) {
    let from = piece.square;
    if from.row == 0 {
        return;
    }

    if let Some(one) = from.offset(-1, 0) {
        if board.is_empty(one) {
            move_list.push(one);

            if from.row == PAWN_START_ROW {
                if let Some(two) = from.offset(-2, 0) {
                    if board.is_empty(two) {
                        move_list.push(two);
                    }
                }
            }
        }
    }

    for d_cell in [-1, 1] {
        if let Some(diag) = from.offset(-1, d_cell) {
            if !board.is_empty(diag) && piece.color.is_opponent(board.value_at(diag)) {
                move_list.push(diag);
            }
        }
    }
}

pub fn generate_knight_moves(piece: &PieceRef, board: &Board, move_list: &mut impl MoveBuffer) {
    for &(d_row, d_cell) in &KNIGHT_OFFSETS {
        let Some(target) = piece.square.offset(d_row, d_cell) else {
            continue;
        };
        if board.is_empty(target) || piece.color.is_opponent(board.value_at(target)) {
            move_list.push(target);
        }
    }
}

pub fn generate_bishop_moves(
    piece: &PieceRef,
    board: &Board,
    opts: &MoveOptions,
    move_list: &mut impl MoveBuffer,
) {
    generate_sliding_moves(piece, board, &BISHOP_DIRECTIONS, opts, move_list);
}

pub fn generate_rook_moves(
    piece: &PieceRef,
    board: &Board,
    opts: &MoveOptions,
    move_list: &mut impl MoveBuffer,
) {
    generate_sliding_moves(piece, board, &ROOK_DIRECTIONS, opts, move_list);
}

/// Bishop rays first, then rook rays.
pub fn generate_queen_moves(
    piece: &PieceRef,
    board: &Board,
    opts: &MoveOptions,
    move_list: &mut impl MoveBuffer,
) {
    generate_bishop_moves(piece, board, opts, move_list);
    generate_rook_moves(piece, board, opts, move_list);
}

/// One step in each of the eight directions.
pub fn generate_king_steps(piece: &PieceRef, board: &Board, move_list: &mut impl MoveBuffer) {
    generate_queen_moves(piece, board, &MoveOptions::single_step(), move_list);
}

pub fn generate_king_moves(
    piece: &PieceRef,
    board: &Board,
    opts: &MoveOptions,
    move_list: &mut impl MoveBuffer,
) {
    generate_king_steps(piece, board, move_list);
    if let Some(castling) = opts.castling {
        generate_castling_moves(piece, board, castling, move_list);
    }
}

/// Up to two extra king destinations.
///
/// A wing is available when its flag is still set and the king's rook ray
/// reaches the probe cell on that side. Squares the king crosses are not
/// tested for attacks.
pub fn generate_castling_moves(
    piece: &PieceRef,
    board: &Board,
    castling: &CastlingState,
    move_list: &mut impl MoveBuffer,
) {
    let Some(rights) = castling.get(piece.color) else {
        return;
    };
    if rights.temporarily_disallowed {
        return;
    }

    let mut rays = CandidateList::new();
    generate_rook_moves(piece, board, &MoveOptions::default(), &mut rays);

    if rights.allowed_with_right_rook {
        if let Some(landing) = rays.iter().find(|sq| sq.cell == RIGHT_CASTLE_PROBE_CELL) {
            move_list.push(Square {
                row: landing.row,
                cell: right_castle_target(piece.color),
            });
        }
    }

    if rights.allowed_with_left_rook {
        if let Some(landing) = rays.iter().find(|sq| sq.cell == LEFT_CASTLE_PROBE_CELL) {
            move_list.push(Square {
                row: landing.row,
                cell: left_castle_target(piece.color),
            });
        }
    }
}

/// Single dispatch point over piece kinds.
pub fn generate_pseudo_legal(
    piece: &PieceRef,
    board: &Board,
    castling: &CastlingState,
    move_list: &mut impl MoveBuffer,
) {
    let opts = MoveOptions::with_castling(castling);
    match piece.piece {
        Piece::Pawn => generate_pawn_moves(piece, board, move_list),
        Piece::Knight => generate_knight_moves(piece, board, move_list),
        Piece::Bishop => generate_bishop_moves(piece, board, &opts, move_list),
        Piece::Rook => generate_rook_moves(piece, board, &opts, move_list),
        Piece::Queen => generate_queen_moves(piece, board, &opts, move_list),
        Piece::King => generate_king_moves(piece, board, &opts, move_list),
    }
}

/// Allocating convenience wrapper around [`generate_pseudo_legal`].
pub fn pseudo_legal_moves(piece: &PieceRef, board: &Board, castling: &CastlingState) -> Vec<Square> {
    let mut out = Vec::with_capacity(MAX_CANDIDATES);
    generate_pseudo_legal(piece, board, castling, &mut out);
    out
}
