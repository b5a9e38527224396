//! Piece-square tables.
//!
//! Tables are laid out as seen from White's side of the board: the first
//! row is rank 8, the last row rank 1. Black pieces read the mirrored square.

use shakmaty::{Board, Color, Role, Square};

use crate::eval::tapered::{S, Tapered};

#[rustfmt::skip]
const PAWN: [i16; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

/// Passed-pawn pressure grows with advancement in the endgame.
#[rustfmt::skip]
const PAWN_EG: [i16; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     90,  90,  90,  90,  90,  90,  90,  90,
     50,  50,  50,  50,  50,  50,  50,  50,
     30,  30,  30,  30,  30,  30,  30,  30,
     15,  15,  15,  15,  15,  15,  15,  15,
      5,   5,   5,   5,   5,   5,   5,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i16; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i16; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i16; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i16; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING: [i16; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

/// In the endgame the king belongs in the centre.
#[rustfmt::skip]
const KING_EG: [i16; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

/// Table index for a piece of `color` on `sq`.
#[inline]
fn table_index(color: Color, sq: Square) -> usize {
    let file = sq.file() as usize;
    let rank = sq.rank() as usize;
    match color {
        Color::White => (7 - rank) * 8 + file,
        Color::Black => rank * 8 + file,
    }
}

/// Positional value of a piece of `role` and `color` on `sq`, from that
/// piece's own perspective.
pub fn pst_value(role: Role, color: Color, sq: Square) -> Tapered {
    let i = table_index(color, sq);
    match role {
        Role::Pawn => S(PAWN[i], PAWN_EG[i]),
        Role::Knight => S(KNIGHT[i], KNIGHT[i]),
        Role::Bishop => S(BISHOP[i], BISHOP[i]),
        Role::Rook => S(ROOK[i], ROOK[i]),
        Role::Queen => S(QUEEN[i], QUEEN[i]),
        Role::King => S(KING[i], KING_EG[i]),
    }
}

/// Sum of piece-square values, White minus Black.
pub fn piece_squares(board: &Board) -> Tapered {
    let mut score = Tapered::ZERO;
    for sq in board.occupied() {
        if let Some(piece) = board.piece_at(sq) {
            let value = pst_value(piece.role, piece.color, sq);
            match piece.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use shakmaty::{Chess, Color, Position, Role, Square};

    use super::{piece_squares, pst_value};
    use crate::eval::tapered::Tapered;

    #[test]
    fn starting_position_is_symmetric() {
        assert_eq!(piece_squares(Chess::default().board()), Tapered::ZERO);
    }

    #[test]
    fn tables_mirror_between_colors() {
        for role in [Role::Pawn, Role::Knight, Role::King] {
            assert_eq!(
                pst_value(role, Color::White, Square::E4),
                pst_value(role, Color::Black, Square::E5)
            );
        }
    }

    #[test]
    fn central_knight_beats_rim_knight() {
        let centre = pst_value(Role::Knight, Color::White, Square::E4);
        let rim = pst_value(Role::Knight, Color::White, Square::A1);
        assert!(centre.mg() > rim.mg());
    }

    #[test]
    fn king_prefers_shelter_in_middlegame_and_centre_in_endgame() {
        let corner = pst_value(Role::King, Color::White, Square::G1);
        let centre = pst_value(Role::King, Color::White, Square::E4);
        assert!(corner.mg() > centre.mg());
        assert!(centre.eg() > corner.eg());
    }
}
