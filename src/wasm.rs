use wasm_bindgen::prelude::*;

use crate::board::{Board, CastlingState, Color, Piece};
use crate::error::RulesError;
use crate::moves::execute::{apply_move, legal_moves_by_name};
use crate::moves::square_control::is_king_attacked;
use crate::moves::types::PieceRef;
use crate::session::Session;
use crate::square::Square;
use serde::Deserialize;

/// Piece reference as the front end sends it: `{name, color, row, cell}`.
#[derive(Deserialize)]
struct PieceJson {
    name: String,
    color: Color,
    row: i32,
    cell: i32,
}

impl PieceJson {
    fn square(&self) -> Result<Square, RulesError> {
        Square::new(self.row, self.cell).ok_or(RulesError::OutOfBounds {
            row: self.row,
            cell: self.cell,
        })
    }
}

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(to_js_err)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js_err)
}

/// Legal destinations as `[{"row":..,"cell":..}, ...]`. Unknown piece names
/// give `[]`.
#[wasm_bindgen(js_name = computeLegalMoves)]
pub fn compute_legal_moves(
    piece_json: &str,
    board_json: &str,
    castling_json: &str,
) -> Result<String, JsValue> {
    let piece: PieceJson = parse(piece_json)?;
    let board: Board = parse(board_json)?;
    let castling: CastlingState = parse(castling_json)?;
    let square = piece.square().map_err(to_js_err)?;
    let moves = legal_moves_by_name(&piece.name, piece.color, square, &board, &castling)
        .map_err(to_js_err)?;
    to_json(&moves)
}

#[wasm_bindgen(js_name = isKingAttacked)]
pub fn king_attacked(color: &str, board_json: &str) -> Result<bool, JsValue> {
    let color: Color = color.parse().map_err(to_js_err)?;
    let board: Board = parse(board_json)?;
    is_king_attacked(color, &board).map_err(to_js_err)
}

#[wasm_bindgen(js_name = updateCastlingRights)]
pub fn update_castling_rights(piece_json: &str, castling_json: &str) -> Result<String, JsValue> {
    let piece: PieceJson = parse(piece_json)?;
    let castling: CastlingState = parse(castling_json)?;
    let kind: Piece = piece.name.parse().map_err(to_js_err)?;
    let moved = PieceRef::new(kind, piece.color, piece.square().map_err(to_js_err)?);
    to_json(&castling.after_move(&moved))
}

/// Returns the board after the move; the input string is not modified.
#[wasm_bindgen(js_name = applyMove)]
pub fn apply_move_json(
    board_json: &str,
    piece_json: &str,
    to_row: i32,
    to_cell: i32,
) -> Result<String, JsValue> {
    let mut board: Board = parse(board_json)?;
    let piece: PieceJson = parse(piece_json)?;
    let kind: Piece = piece.name.parse().map_err(to_js_err)?;
    let from = PieceRef::new(kind, piece.color, piece.square().map_err(to_js_err)?);
    let to = Square::new(to_row, to_cell).ok_or_else(|| {
        to_js_err(RulesError::OutOfBounds {
            row: to_row,
            cell: to_cell,
        })
    })?;
    apply_move(&mut board, &from, to);
    to_json(&board)
}

/// Stateful game for the browser.
#[wasm_bindgen]
pub struct RulesEngine {
    session: Session,
}

#[wasm_bindgen]
impl RulesEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RulesEngine {
        console_error_panic_hook::set_once();
        RulesEngine {
            session: Session::new(),
        }
    }

    /// Reset to the starting position.
    pub fn new_game(&mut self) {
        self.session = Session::new();
    }

    /// Whole session state as JSON (board, castling, underCheck, player, logs).
    pub fn state(&self) -> Result<String, JsValue> {
        to_json(&self.session)
    }

    pub fn legal_moves(&self, row: i32, cell: i32) -> Result<String, JsValue> {
        let moves = self
            .session
            .legal_moves_from(row, cell)
            .map_err(to_js_err)?;
        to_json(&moves)
    }

    /// Returns JSON: {"valid": bool, "error": string|null}
    pub fn play(&mut self, from_row: i32, from_cell: i32, to_row: i32, to_cell: i32) -> String {
        match self.session.play((from_row, from_cell), (to_row, to_cell)) {
            Ok(_) => r#"{"valid":true,"error":null}"#.to_string(),
            Err(err) => format!(
                r#"{{"valid":false,"error":{}}}"#,
                serde_json::Value::String(err.to_string())
            ),
        }
    }

    pub fn rotate(&mut self) {
        self.session.rotate();
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
