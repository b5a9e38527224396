//! Chess rules collaborator: legal moves, apply/undo, status and evaluation.

mod chess_move;
mod error;
pub mod eval;
mod game;
mod method;

pub use chess_move::{Move, MoveTags};
pub use error::GameError;
pub use game::{ChessGame, Game, STARTING_FEN};
pub use method::{Method, Outcome};
pub use shakmaty::{Color, Role, Square};
