//! Static evaluation: tapered material plus piece-square tables.

pub mod material;
pub mod phase;
pub mod pst;
pub mod tapered;

use shakmaty::{Chess, Position};

pub use tapered::{S, Tapered};

/// Static evaluation in centipawns from White's perspective.
///
/// Terminal positions are not recognised here; callers classify
/// checkmate and draws before asking for a score.
pub fn evaluate(position: &Chess) -> i32 {
    let board = position.board();
    let score = material::material(board) + pst::piece_squares(board);
    score.blend(phase::game_phase(board))
}
