//! Property-based tests over random play-outs from the start position.
//!
//! Each ply the side to move is at the bottom: a move is played, then the
//! board is rotated for the other side.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;
use signboard::board::{Board, CastlingState, Color, Piece};
use signboard::moves::execute::{all_legal_moves, legal_moves, play_move};
use signboard::moves::movegen::pseudo_legal_moves;
use signboard::moves::square_control::is_king_attacked;
use signboard::moves::types::PieceRef;
use signboard::square::Square;

#[derive(Debug, Clone, Copy)]
struct Position {
    board: Board,
    castling: CastlingState,
    to_move: Color,
}

fn both_kings_present(board: &Board) -> bool {
    board.find_king(Color::White).is_some() && board.find_king(Color::Black).is_some()
}

/// Positions reached by playing `plies` random legal moves. Stops early when
/// the side to move is stuck or a king has left the board.
fn random_playout(seed: u64, plies: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position {
        board: Board::new(),
        castling: CastlingState::initial(),
        to_move: Color::White,
    };
    let mut seen = vec![pos];

    for _ in 0..plies {
        if !both_kings_present(&pos.board) {
            break;
        }
        let Ok(moves) = all_legal_moves(pos.to_move, &pos.board, &pos.castling) else {
            break;
        };
        if moves.is_empty() {
            break;
        }
        let (piece, to) = moves[rng.random_range(0..moves.len())];
        play_move(&mut pos.board, &piece, to);
        if matches!(piece.piece, Piece::King | Piece::Rook) {
            pos.castling = pos.castling.after_move(&piece);
        }
        pos.board = pos.board.rotated();
        pos.to_move = !pos.to_move;
        seen.push(pos);
    }

    seen
}

fn own_pieces(board: &Board, color: Color) -> Vec<PieceRef> {
    let mut out = Vec::new();
    for row in 0..8 {
        for cell in 0..8 {
            let Some(sq) = Square::new(row, cell) else {
                continue;
            };
            if let Ok(piece) = PieceRef::on_board(board, sq) {
                if piece.color == color {
                    out.push(piece);
                }
            }
        }
    }
    out
}

/// Cells strictly between two squares on a shared line.
fn between(from: Square, to: Square) -> Vec<Square> {
    let dr = (to.row as i32 - from.row as i32).signum();
    let dc = (to.cell as i32 - from.cell as i32).signum();
    let mut out = Vec::new();
    let mut cur = from;
    while let Some(next) = cur.offset(dr, dc) {
        if next == to {
            break;
        }
        out.push(next);
        cur = next;
    }
    out
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn ply_strategy() -> impl Strategy<Value = usize> {
    0..=30usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: no destination ever holds a piece of the mover's color
    #[test]
    fn prop_no_friendly_targets(seed in seed_strategy(), plies in ply_strategy()) {
        for pos in random_playout(seed, plies) {
            for piece in own_pieces(&pos.board, pos.to_move) {
                for to in pseudo_legal_moves(&piece, &pos.board, &pos.castling) {
                    prop_assert_ne!(pos.board.color_at(to), Some(pos.to_move), "{} -> {}", piece, to);
                }
            }
        }
    }

    /// Property: sliders never pass over an occupied cell
    #[test]
    fn prop_rays_do_not_jump(seed in seed_strategy(), plies in ply_strategy()) {
        for pos in random_playout(seed, plies) {
            for piece in own_pieces(&pos.board, pos.to_move) {
                if !matches!(piece.piece, Piece::Bishop | Piece::Rook | Piece::Queen) {
                    continue;
                }
                for to in pseudo_legal_moves(&piece, &pos.board, &pos.castling) {
                    for cell in between(piece.square, to) {
                        prop_assert!(pos.board.is_empty(cell), "{} -> {} jumps {}", piece, to, cell);
                    }
                }
            }
        }
    }

    /// Property: legal moves are a subset of pseudo-legal moves, in the same order
    #[test]
    fn prop_legal_is_filtered_pseudo(seed in seed_strategy(), plies in ply_strategy()) {
        for pos in random_playout(seed, plies) {
            if !both_kings_present(&pos.board) {
                continue;
            }
            for piece in own_pieces(&pos.board, pos.to_move) {
                let pseudo = pseudo_legal_moves(&piece, &pos.board, &pos.castling);
                let legal = legal_moves(&piece, &pos.board, &pos.castling).unwrap();
                let filtered: Vec<Square> =
                    pseudo.iter().copied().filter(|to| legal.contains(to)).collect();
                prop_assert_eq!(filtered, legal);
            }
        }
    }

    /// Property: queries neither mutate the board nor change their answer
    #[test]
    fn prop_queries_are_idempotent(seed in seed_strategy(), plies in ply_strategy()) {
        for pos in random_playout(seed, plies) {
            if !both_kings_present(&pos.board) {
                continue;
            }
            let before = pos.board;
            for color in [Color::White, Color::Black] {
                let first = is_king_attacked(color, &pos.board);
                prop_assert_eq!(first, is_king_attacked(color, &pos.board));
            }
            let first = all_legal_moves(pos.to_move, &pos.board, &pos.castling).unwrap();
            let second = all_legal_moves(pos.to_move, &pos.board, &pos.castling).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(pos.board, before);
        }
    }

    /// Property: castling flags only ever go from allowed to not allowed
    #[test]
    fn prop_castling_rights_are_monotonic(seed in seed_strategy(), plies in ply_strategy()) {
        let positions = random_playout(seed, plies);
        for pair in positions.windows(2) {
            let (prev, next) = (pair[0].castling, pair[1].castling);
            for color in [Color::White, Color::Black] {
                match (prev.get(color), next.get(color)) {
                    (None, after) => prop_assert!(after.is_none()),
                    (Some(_), None) => {}
                    (Some(a), Some(b)) => {
                        prop_assert!(a.allowed_with_left_rook || !b.allowed_with_left_rook);
                        prop_assert!(a.allowed_with_right_rook || !b.allowed_with_right_rook);
                        prop_assert!(b.allowed_with_left_rook || b.allowed_with_right_rook);
                    }
                }
            }
        }
    }
}
