pub mod board;
pub mod error;
#[cfg(feature = "cli")]
pub mod logger;
pub mod moves;
pub mod session;
pub mod square;
pub mod status;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use board::{Board, CastlingRights, CastlingState, Color, Piece, update_castling_rights};
pub use error::RulesError;
pub use moves::execute::{apply_move, legal_moves, legal_moves_by_name};
pub use moves::movegen::pseudo_legal_moves;
pub use moves::square_control::is_king_attacked;
pub use moves::types::PieceRef;
pub use square::Square;
