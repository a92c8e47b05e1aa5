use std::str::FromStr;

use signboard::board::{Board, CastlingState, Color, Piece};
use signboard::moves::execute::{legal_moves, legal_moves_by_name};
use signboard::moves::movegen::pseudo_legal_moves;
use signboard::moves::types::PieceRef;
use signboard::square::Square;

fn sq(row: i32, cell: i32) -> Square {
    Square::new(row, cell).unwrap()
}

fn piece(kind: Piece, color: Color, row: i32, cell: i32) -> PieceRef {
    PieceRef::new(kind, color, sq(row, cell))
}

#[test]
fn start_position_king_pawn_has_single_and_double_advance() {
    let b = Board::new();
    let moves = legal_moves(
        &piece(Piece::Pawn, Color::White, 6, 4),
        &b,
        &CastlingState::initial(),
    )
    .unwrap();
    assert_eq!(moves, vec![sq(5, 4), sq(4, 4)]);
}

#[test]
fn start_position_queen_knight_has_two_moves() {
    let b = Board::new();
    let moves = legal_moves(
        &piece(Piece::Knight, Color::White, 7, 1),
        &b,
        &CastlingState::initial(),
    )
    .unwrap();
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&sq(5, 0)));
    assert!(moves.contains(&sq(5, 2)));
}

#[test]
fn start_position_king_is_boxed_in() {
    let b = Board::new();
    let moves = legal_moves(
        &piece(Piece::King, Color::White, 7, 4),
        &b,
        &CastlingState::initial(),
    )
    .unwrap();
    assert!(moves.is_empty());
}

#[test]
fn self_check_is_filtered_out() {
    // White: K (7,4), R (6,4). Black: r (0,4). Sliding the rook sideways
    // exposes the file.
    let b = Board::from_str("4r2k/8/8/8/8/8/4R3/4K3").unwrap();
    let rook = piece(Piece::Rook, Color::White, 6, 4);

    let pseudo = pseudo_legal_moves(&rook, &b, &CastlingState::none());
    assert!(pseudo.contains(&sq(6, 5)));

    let legal = legal_moves(&rook, &b, &CastlingState::none()).unwrap();
    assert!(!legal.contains(&sq(6, 5)), "(6,4)->(6,5) must be filtered");
    assert!(legal.contains(&sq(5, 4)), "staying on the file is fine");
}

#[test]
fn king_may_not_step_into_attack() {
    // White K (7,4); black r on (0,3) covers the whole cell-3 file.
    let b = Board::from_str("3r3k/8/8/8/8/8/8/4K3").unwrap();
    let moves = legal_moves(
        &piece(Piece::King, Color::White, 7, 4),
        &b,
        &CastlingState::none(),
    )
    .unwrap();
    assert!(!moves.contains(&sq(7, 3)));
    assert!(!moves.contains(&sq(6, 3)));
    assert!(moves.contains(&sq(7, 5)));
    assert!(moves.contains(&sq(6, 4)));
    assert_eq!(moves.len(), 3);
}

#[test]
fn capturing_the_checker_is_legal() {
    // Black q on (6,4) next to white K (7,4), protected by nothing.
    let b = Board::from_str("7k/8/8/8/8/8/4q3/4K3").unwrap();
    let moves = legal_moves(
        &piece(Piece::King, Color::White, 7, 4),
        &b,
        &CastlingState::none(),
    )
    .unwrap();
    assert_eq!(moves, vec![sq(6, 4)]);
}

#[test]
fn check_must_be_answered() {
    // White K (7,4) checked by black r (0,4); white N on (7,1) can only block
    // by landing on the file.
    let b = Board::from_str("4r2k/8/8/8/8/8/8/1N2K3").unwrap();
    let moves = legal_moves(
        &piece(Piece::Knight, Color::White, 7, 1),
        &b,
        &CastlingState::none(),
    )
    .unwrap();
    assert!(moves.is_empty(), "no knight move from (7,1) reaches cell 4");

    let b = Board::from_str("4r2k/8/8/8/8/8/8/2N1K3").unwrap();
    let moves = legal_moves(
        &piece(Piece::Knight, Color::White, 7, 2),
        &b,
        &CastlingState::none(),
    )
    .unwrap();
    assert_eq!(moves, vec![sq(6, 4)]);
}

#[test]
fn castling_is_offered_when_path_is_clear() {
    let b = Board::from_str("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
    let moves = legal_moves(
        &piece(Piece::King, Color::White, 7, 4),
        &b,
        &CastlingState::initial(),
    )
    .unwrap();
    assert!(moves.contains(&sq(7, 6)));
    assert!(moves.contains(&sq(7, 2)));
}

#[test]
fn castling_transit_square_is_not_checked_for_attacks() {
    // Black r on (0,5) attacks (7,5), the square the king crosses. Only the
    // landing square is simulated, so the right-hand castle is still offered.
    let b = Board::from_str("5r1k/8/8/8/8/8/8/4K2R").unwrap();
    let moves = legal_moves(
        &piece(Piece::King, Color::White, 7, 4),
        &b,
        &CastlingState::initial(),
    )
    .unwrap();
    assert!(moves.contains(&sq(7, 6)));
    assert!(!moves.contains(&sq(7, 5)));
}

#[test]
fn castling_into_attack_is_filtered() {
    // Black r on (0,6) covers the landing square.
    let b = Board::from_str("6rk/8/8/8/8/8/8/4K2R").unwrap();
    let moves = legal_moves(
        &piece(Piece::King, Color::White, 7, 4),
        &b,
        &CastlingState::initial(),
    )
    .unwrap();
    assert!(!moves.contains(&sq(7, 6)));
}

#[test]
fn piece_names_are_case_insensitive_at_the_boundary() {
    let b = Board::new();
    for name in ["pawn", "PAWN", "Pawn"] {
        let moves =
            legal_moves_by_name(name, Color::White, sq(6, 0), &b, &CastlingState::initial())
                .unwrap();
        assert_eq!(moves, vec![sq(5, 0), sq(4, 0)]);
    }
    let moves =
        legal_moves_by_name("dragon", Color::White, sq(6, 0), &b, &CastlingState::initial())
            .unwrap();
    assert!(moves.is_empty());
}
