use crate::board::{Board, CastlingState, Color, Piece};
use crate::error::RulesError;
use crate::moves::movegen::generate_pseudo_legal;
use crate::moves::square_control::is_king_attacked;
use crate::moves::types::{CandidateList, MAX_CANDIDATES, MoveBuffer, PieceRef, PlayedMove};
use crate::square::{BOARD_SIZE, Square};
use tracing::{debug, trace};

/// Cells a castling rook leaves from.
const LEFT_ROOK_HOME: u8 = 0;
const RIGHT_ROOK_HOME: u8 = BOARD_SIZE as u8 - 1;

/// Rook (from, to) if `to` is a two-cell sideways king step.
#[inline(always)]
fn rook_castle_squares(piece: &PieceRef, to: Square) -> Option<(Square, Square)> {
    if piece.piece != Piece::King || piece.square.row != to.row {
        return None;
    }
    let from = piece.square;
    match to.cell as i32 - from.cell as i32 {
        2 => Some((
            Square {
                row: from.row,
                cell: RIGHT_ROOK_HOME,
            },
            Square {
                row: to.row,
                cell: to.cell - 1,
            },
        )),
        -2 => Some((
            Square {
                row: from.row,
                cell: LEFT_ROOK_HOME,
            },
            Square {
                row: to.row,
                cell: to.cell + 1,
            },
        )),
        _ => None,
    }
}

/// Move whatever stands on `piece.square` to `to`, in place.
///
/// The source cell is cleared and the destination overwritten. Nothing else
/// happens: no rook relocation, no bookkeeping of the captured piece.
#[inline]
pub fn apply_move(board: &mut Board, piece: &PieceRef, to: Square) {
    let value = board.value_at(piece.square);
    board.set_value(to, value);
    board.clear_square(piece.square);
}

/// Play a move the way a game does: castling also brings the rook across.
pub fn play_move(board: &mut Board, piece: &PieceRef, to: Square) -> PlayedMove {
    let captured = board.piece_at(to).map(|(_, p)| p);
    let castling_rook = rook_castle_squares(piece, to);

    if let Some((rook_from, rook_to)) = castling_rook {
        let rook = board.value_at(rook_from);
        board.set_value(rook_to, rook);
        board.clear_square(rook_from);
    }

    apply_move(board, piece, to);

    let played = PlayedMove {
        piece: *piece,
        to,
        captured,
        castling_rook,
    };
    debug!(%played, castle = played.is_castling(), "played move");
    played
}

/// Fill `moves` with the destinations of `piece` that do not leave its own
/// king attacked.
///
/// Every candidate is tried on a copy of the board; the caller's board is
/// never written to. Castling state plays no part in the self-check test.
pub fn generate_legal(
    piece: &PieceRef,
    board: &Board,
    castling: &CastlingState,
    moves: &mut impl MoveBuffer,
) -> Result<(), RulesError> {
    let mut scratch = CandidateList::new();
    generate_pseudo_legal(piece, board, castling, &mut scratch);
    moves.clear();

    for to in scratch.iter().copied() {
        let mut sim = *board;
        apply_move(&mut sim, piece, to);
        if is_king_attacked(piece.color, &sim)? {
            trace!(%piece, %to, "filtered: leaves own king attacked");
            continue;
        }
        moves.push(to);
    }

    debug!(
        %piece,
        pseudo = scratch.len(),
        legal = moves.len(),
        "legal moves generated"
    );
    Ok(())
}

/// Legal destinations of `piece` as a fresh `Vec`.
pub fn legal_moves(
    piece: &PieceRef,
    board: &Board,
    castling: &CastlingState,
) -> Result<Vec<Square>, RulesError> {
    let mut moves = Vec::with_capacity(MAX_CANDIDATES);
    generate_legal(piece, board, castling, &mut moves)?;
    Ok(moves)
}

/// Boundary form taking the kind by name. Unknown names yield no moves.
pub fn legal_moves_by_name(
    name: &str,
    color: Color,
    square: Square,
    board: &Board,
    castling: &CastlingState,
) -> Result<Vec<Square>, RulesError> {
    match name.parse::<Piece>() {
        Ok(piece) => legal_moves(&PieceRef::new(piece, color, square), board, castling),
        Err(err) => {
            debug!(%err, "no generator for piece name");
            Ok(Vec::new())
        }
    }
}

/// Is `to` among the legal destinations of `piece`?
#[inline]
pub fn is_legal_move(
    piece: &PieceRef,
    to: Square,
    board: &Board,
    castling: &CastlingState,
) -> Result<bool, RulesError> {
    Ok(legal_moves(piece, board, castling)?.contains(&to))
}

/// Every legal (piece, destination) pair for `color`, row-major by source.
pub fn all_legal_moves(
    color: Color,
    board: &Board,
    castling: &CastlingState,
) -> Result<Vec<(PieceRef, Square)>, RulesError> {
    let mut out = Vec::new();
    let mut moves = CandidateList::new();

    for row in 0..BOARD_SIZE as i32 {
        for cell in 0..BOARD_SIZE as i32 {
            let Some(sq) = Square::new(row, cell) else {
                continue;
            };
            let Some((owner, kind)) = board.piece_at(sq) else {
                continue;
            };
            if owner != color {
                continue;
            }
            let piece = PieceRef::new(kind, owner, sq);
            generate_legal(&piece, board, castling, &mut moves)?;
            out.extend(moves.iter().map(|&to| (piece, to)));
        }
    }

    Ok(out)
}
