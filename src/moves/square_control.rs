use crate::board::{Board, Color, Piece};
use crate::error::RulesError;
use crate::moves::movegen::{
    generate_bishop_moves, generate_king_steps, generate_knight_moves, generate_pawn_moves,
    generate_rook_moves,
};
use crate::moves::types::{CandidateList, MoveOptions, PieceRef};
use crate::square::Square;
use tracing::trace;

/// True when any target holds one of `attackers`.
#[inline(always)]
fn any_holds(board: &Board, targets: &[Square], attackers: &[i8]) -> bool {
    targets
        .iter()
        .any(|&sq| attackers.contains(&board.value_at(sq)))
}

/// Rook or queen on an open file/rank through `probe`.
fn attacked_on_lines(probe: &PieceRef, board: &Board) -> bool {
    let enemy = probe.color.opposite();
    let mut targets = CandidateList::new();
    generate_rook_moves(
        &probe.as_kind(Piece::Rook),
        board,
        &MoveOptions::default(),
        &mut targets,
    );
    any_holds(
        board,
        &targets,
        &[Piece::Rook.signed(enemy), Piece::Queen.signed(enemy)],
    )
}

/// Bishop or queen on an open diagonal through `probe`.
fn attacked_on_diagonals(probe: &PieceRef, board: &Board) -> bool {
    let enemy = probe.color.opposite();
    let mut targets = CandidateList::new();
    generate_bishop_moves(
        &probe.as_kind(Piece::Bishop),
        board,
        &MoveOptions::default(),
        &mut targets,
    );
    any_holds(
        board,
        &targets,
        &[Piece::Bishop.signed(enemy), Piece::Queen.signed(enemy)],
    )
}

fn attacked_by_knight(probe: &PieceRef, board: &Board) -> bool {
    let mut targets = CandidateList::new();
    generate_knight_moves(&probe.as_kind(Piece::Knight), board, &mut targets);
    any_holds(board, &targets, &[Piece::Knight.signed(probe.color.opposite())])
}

/// Castling targets never count: a king cannot attack by castling.
fn attacked_by_king(probe: &PieceRef, board: &Board) -> bool {
    let mut targets = CandidateList::new();
    generate_king_steps(&probe.as_kind(Piece::King), board, &mut targets);
    any_holds(board, &targets, &[Piece::King.signed(probe.color.opposite())])
}

/// Pawns only move towards row 0, so the board is turned around first and
/// the pawn generator is run from the mirrored square.
fn attacked_by_pawn(probe: &PieceRef, board: &Board) -> bool {
    let rotated = board.rotated();
    let mirrored = PieceRef::new(Piece::Pawn, probe.color, probe.square.mirrored());
    let mut targets = CandidateList::new();
    generate_pawn_moves(&mirrored, &rotated, &mut targets);
    any_holds(&rotated, &targets, &[Piece::Pawn.signed(probe.color.opposite())])
}

/// Would a piece of `defender` standing on `square` be attacked?
///
/// Each attacker pattern is generated outward from `square` and the landing
/// cells are checked for the matching enemy piece.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let probe = PieceRef::new(Piece::King, defender, square);

    attacked_on_lines(&probe, board)
        || attacked_on_diagonals(&probe, board)
        || attacked_by_knight(&probe, board)
        || attacked_by_pawn(&probe, board)
        || attacked_by_king(&probe, board)
}

/// Is `color`'s king under attack? Fails when that king is missing.
pub fn is_king_attacked(color: Color, board: &Board) -> Result<bool, RulesError> {
    let king_sq = board.king_square(color)?;
    let attacked = is_square_attacked(board, king_sq, color);
    trace!(%color, king = %king_sq, attacked, "king attack check");
    Ok(attacked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_rook_does_not_attack() {
        let b: Board = "4r3/8/8/8/4P3/8/8/4K3".parse().unwrap();
        assert_eq!(is_king_attacked(Color::White, &b), Ok(false));
    }

    #[test]
    fn queen_on_diagonal_attacks() {
        let b: Board = "k7/8/8/8/8/8/8/q6K".parse().unwrap();
        assert_eq!(is_king_attacked(Color::White, &b), Ok(true));

        let b: Board = "k7/8/8/8/8/8/6q1/7K".parse().unwrap();
        assert_eq!(is_king_attacked(Color::White, &b), Ok(true));
    }

    #[test]
    fn friendly_pieces_never_attack() {
        let b: Board = "k7/8/8/8/8/8/6Q1/5N1K".parse().unwrap();
        assert_eq!(is_king_attacked(Color::White, &b), Ok(false));
    }

    #[test]
    fn missing_king_is_an_error() {
        let b: Board = "8/8/8/8/8/8/8/4K3".parse().unwrap();
        assert_eq!(
            is_king_attacked(Color::Black, &b),
            Err(RulesError::KingNotFound(Color::Black))
        );
    }
}
