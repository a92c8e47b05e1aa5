//! Game controller for a front end: owns the position, castling rights,
//! check flags and status log, and accepts moves for the side at the bottom.

use crate::board::{Board, CastlingState, Color, Piece};
use crate::error::RulesError;
use crate::moves::execute::{legal_moves, play_move};
use crate::moves::square_control::is_king_attacked;
use crate::moves::types::{PieceRef, PlayedMove};
use crate::square::Square;
use crate::status::{StatusEntry, UnderCheck};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionState")]
pub struct Session {
    board: Board,
    castling: CastlingState,
    under_check: UnderCheck,
    /// Side drawn at the bottom of the board; the only side allowed to move.
    player: Color,
    logs: Vec<StatusEntry>,
}

/// Wire form of a [`Session`]; only becomes one after the board validates.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionState {
    board: Board,
    castling: CastlingState,
    under_check: UnderCheck,
    player: Color,
    logs: Vec<StatusEntry>,
}

impl TryFrom<SessionState> for Session {
    type Error = RulesError;

    fn try_from(state: SessionState) -> Result<Self, Self::Error> {
        state.board.validate()?;
        Ok(Session {
            board: state.board,
            castling: state.castling,
            under_check: state.under_check,
            player: state.player,
            logs: state.logs,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starting position, white at the bottom, full castling rights.
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            castling: CastlingState::initial(),
            under_check: UnderCheck::default(),
            player: Color::White,
            logs: Vec::new(),
        }
    }

    /// Start from an arbitrary position. `player` is the side at the bottom.
    pub fn from_board(
        board: Board,
        castling: CastlingState,
        player: Color,
    ) -> Result<Self, RulesError> {
        board.validate()?;
        let under_check = UnderCheck::of_board(&board)?;
        Ok(Session {
            board,
            castling,
            under_check,
            player,
            logs: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn castling(&self) -> &CastlingState {
        &self.castling
    }

    /// Mutable access for callers that manage the suspension flag.
    pub fn castling_mut(&mut self) -> &mut CastlingState {
        &mut self.castling
    }

    pub fn under_check(&self) -> UnderCheck {
        self.under_check
    }

    pub fn player(&self) -> Color {
        self.player
    }

    pub fn logs(&self) -> &[StatusEntry] {
        &self.logs
    }

    fn square(row: i32, cell: i32) -> Result<Square, RulesError> {
        Square::new(row, cell).ok_or(RulesError::OutOfBounds { row, cell })
    }

    /// The player's piece on `(row, cell)`.
    fn own_piece(&self, row: i32, cell: i32) -> Result<PieceRef, RulesError> {
        let square = Self::square(row, cell)?;
        let piece = PieceRef::on_board(&self.board, square)?;
        if piece.color != self.player {
            return Err(RulesError::NotYourPiece {
                square,
                color: piece.color,
            });
        }
        Ok(piece)
    }

    /// Legal destinations of the player's piece on `(row, cell)`.
    #[instrument(skip(self), level = "debug")]
    pub fn legal_moves_from(&self, row: i32, cell: i32) -> Result<Vec<Square>, RulesError> {
        let piece = self.own_piece(row, cell)?;
        legal_moves(&piece, &self.board, &self.castling)
    }

    /// Move the player's piece from `from` to `to`.
    ///
    /// On success the opponent's check flag is refreshed (and logged when
    /// set) and castling rights follow king and rook moves.
    #[instrument(skip(self), level = "debug")]
    pub fn play(&mut self, from: (i32, i32), to: (i32, i32)) -> Result<PlayedMove, RulesError> {
        let piece = self.own_piece(from.0, from.1)?;
        let to = Self::square(to.0, to.1)?;

        // Kings are never captured; the game is over before that.
        let takes_king = matches!(self.board.piece_at(to), Some((_, Piece::King)));
        if takes_king || !legal_moves(&piece, &self.board, &self.castling)?.contains(&to) {
            return Err(RulesError::IllegalMove {
                from: piece.square,
                to,
            });
        }

        let mut next = self.board;
        let played = play_move(&mut next, &piece, to);

        let opponent = piece.color.opposite();
        let opponent_checked = is_king_attacked(opponent, &next)?;

        // Nothing below can fail.
        self.board = next;
        self.under_check.set(opponent, opponent_checked);
        if opponent_checked {
            let entry = StatusEntry::check(opponent);
            info!(%entry, "status");
            self.logs.push(entry);
        }

        if matches!(piece.piece, Piece::King | Piece::Rook) {
            self.castling = self.castling.after_move(&piece);
        }

        debug!(%played, castling = ?self.castling, "session advanced");
        Ok(played)
    }

    /// Turn the board around and hand the move to the other side.
    pub fn rotate(&mut self) {
        self.board = self.board.rotated();
        self.player = self.player.opposite();
        debug!(player = %self.player, "board rotated");
    }
}
