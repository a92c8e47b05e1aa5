use std::str::FromStr;

use signboard::board::{Board, Color, Piece};
use signboard::moves::movegen::generate_pawn_moves;
use signboard::moves::types::PieceRef;
use signboard::square::Square;

fn sq(row: i32, cell: i32) -> Square {
    Square::new(row, cell).unwrap()
}

fn pawn_moves(placement: &str, color: Color, row: i32, cell: i32) -> Vec<Square> {
    let board = Board::from_str(placement).unwrap();
    let mut moves = vec![];
    generate_pawn_moves(&PieceRef::new(Piece::Pawn, color, sq(row, cell)), &board, &mut moves);
    moves
}

fn total_pawn_moves(board: &Board, color: Color) -> usize {
    let mut total = 0;
    for row in 0..8 {
        for cell in 0..8 {
            let at = sq(row, cell);
            if board.piece_at(at) == Some((color, Piece::Pawn)) {
                let mut moves = vec![];
                generate_pawn_moves(&PieceRef::new(Piece::Pawn, color, at), board, &mut moves);
                total += moves.len();
            }
        }
    }
    total
}

#[test]
fn start_position_near_pawns() {
    let board = Board::new();
    assert_eq!(
        total_pawn_moves(&board, Color::White),
        16,
        "White should have 16 pawn moves (8 single + 8 double advances)"
    );
}

#[test]
fn far_pawns_advance_off_the_board_edge() {
    // Black pawns on row 1 still head for row 0, straight into their own
    // pieces, so none of them can move.
    let board = Board::new();
    assert_eq!(total_pawn_moves(&board, Color::Black), 0);
}

#[test]
fn rotated_start_position_gives_black_the_double_step() {
    let board = Board::new().rotated();
    assert_eq!(total_pawn_moves(&board, Color::Black), 16);
    assert_eq!(total_pawn_moves(&board, Color::White), 0);
}

#[test]
fn double_step_only_from_start_row() {
    let moves = pawn_moves("4k3/8/8/8/8/4P3/8/4K3", Color::White, 5, 4);
    assert_eq!(moves, vec![sq(4, 4)]);
}

#[test]
fn double_step_needs_both_cells_empty() {
    // Blocked on the second cell.
    let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3", Color::White, 6, 4);
    assert_eq!(moves, vec![sq(5, 4)]);

    // Blocked right in front: no advance at all.
    let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3", Color::White, 6, 4);
    assert!(moves.is_empty());
}

#[test]
fn captures_only_enemy_pieces_diagonally() {
    // Black knight on (5,3), white knight on (5,5).
    let moves = pawn_moves("4k3/8/8/8/8/3n1N2/4P3/4K3", Color::White, 6, 4);
    assert_eq!(moves, vec![sq(5, 4), sq(4, 4), sq(5, 3)]);
}

#[test]
fn edge_pawn_has_one_diagonal() {
    let moves = pawn_moves("4k3/8/8/8/8/1n6/P7/4K3", Color::White, 6, 0);
    assert_eq!(moves, vec![sq(5, 0), sq(4, 0), sq(5, 1)]);
}

#[test]
fn pawn_on_row_zero_is_stuck() {
    let moves = pawn_moves("P3k3/8/8/8/8/8/8/4K3", Color::White, 0, 0);
    assert!(moves.is_empty());
}

#[test]
fn no_promotion_or_en_passant_destinations() {
    // Row 1 pawn just walks onto row 0; an enemy pawn beside it is never
    // captured sideways.
    let moves = pawn_moves("k7/3Pp3/8/8/8/8/8/4K3", Color::White, 1, 3);
    assert_eq!(moves, vec![sq(0, 3)]);
}
