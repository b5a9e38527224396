//! Game phase from remaining non-pawn material.

use shakmaty::{Board, Role};

/// Phase of a full starting complement of non-pawn material.
///
/// Weights: Knight=1, Bishop=1, Rook=2, Queen=4, so 4 + 4 + 8 + 8 = 24.
pub const MAX_PHASE: i32 = 24;

/// Phase in `0..=MAX_PHASE`; promoted pieces cannot push it past the maximum.
pub fn game_phase(board: &Board) -> i32 {
    let weight = |role: Role| board.by_role(role).count() as i32;
    let phase = weight(Role::Knight)
        + weight(Role::Bishop)
        + weight(Role::Rook) * 2
        + weight(Role::Queen) * 4;
    phase.min(MAX_PHASE)
}

#[cfg(test)]
mod tests {
    use shakmaty::{Chess, Position};

    use super::{MAX_PHASE, game_phase};
    use crate::ChessGame;

    #[test]
    fn starting_position_is_full_phase() {
        assert_eq!(game_phase(Chess::default().board()), MAX_PHASE);
    }

    #[test]
    fn bare_kings_are_endgame() {
        let game: ChessGame = "8/8/4k3/8/8/3K4/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(game.position().board()), 0);
    }

    #[test]
    fn rook_endgame_phase() {
        let game: ChessGame = "4k3/8/8/8/8/8/r7/R3K3 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(game.position().board()), 4);
    }
}
